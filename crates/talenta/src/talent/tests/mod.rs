mod career;
mod common;
mod service;
