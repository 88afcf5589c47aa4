mod common;
mod pillars;
