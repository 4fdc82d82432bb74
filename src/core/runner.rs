//! The single place git is invoked from.

use crate::core::env::Environment;

pub const GIT_PROGRAM: &str = "git";

/// Overrides prepended to every invocation so output never depends on locale or color settings
const GLOBAL_ARGS: [&str; 4] = ["-c", "core.quotepath=false", "-c", "color.status=false"];

pub struct GitRunner<'a> {
    env: &'a dyn Environment,
}

impl<'a> GitRunner<'a> {
    pub fn new(env: &'a dyn Environment) -> Self {
        Self { env }
    }

    /// Run git with `args`. Failures come back as an empty string.
    pub fn run(&self, args: &[&str]) -> String {
        let mut full_args = Vec::with_capacity(GLOBAL_ARGS.len() + args.len());
        full_args.extend_from_slice(&GLOBAL_ARGS);
        full_args.extend_from_slice(args);

        log::debug!("Running: git {}", args.join(" "));
        let output = self.env.run_command(GIT_PROGRAM, &full_args);
        if output.is_empty() {
            log::debug!("No output from: git {}", args.join(" "));
        }
        output
    }

    pub fn env(&self) -> &'a dyn Environment {
        self.env
    }
}
