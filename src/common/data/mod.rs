use std::{env, path::PathBuf};

use crate::utils::problem::Problem;

pub const EXAMPLE_PROBLEM: &str = "exampleProblem.json";

pub fn test_data_path(file_name: &str) -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    PathBuf::from(manifest_dir).join(file_name)
}

pub fn load_problem(file_name: &str) -> Problem {
    Problem::from_path(test_data_path(file_name)).unwrap()
}
