mod common;
mod social_security;
