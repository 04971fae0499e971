use super::*;

mod batch;
mod single;
