use crate::core::{
    command_init::{CommandOptions, SegmentCommandInit},
    error::Result,
    segment::GitSegment,
};
use std::io::{self, Write};

/// Print the segment for the working directory.
///
/// Outside a work tree, or without git installed, nothing is printed and the
/// command still succeeds so a prompt simply shows no segment.
pub fn execute_render(options: &CommandOptions, newline: bool) -> Result<()> {
    let context = SegmentCommandInit::initialize(options)?;
    let segment = GitSegment::new(&context.env, &context.props);

    if !segment.enabled() {
        log::debug!("Not inside a git work tree, nothing to render");
        return Ok(());
    }

    let rendered = segment.render();
    let mut stdout = io::stdout().lock();
    if newline {
        writeln!(stdout, "{rendered}")?;
    } else {
        write!(stdout, "{rendered}")?;
    }
    stdout.flush()?;
    Ok(())
}
