use crate::core::{
    command_init::{CommandOptions, SegmentCommandInit},
    error::Result,
    segment::GitSegment,
};

/// Whether a segment would be rendered for the working directory
///
/// Options are loaded the same way `render` loads them, so a bad config file or
/// override fails here too.
pub fn execute_check(options: &CommandOptions) -> Result<bool> {
    let context = SegmentCommandInit::initialize(options)?;
    let enabled = GitSegment::new(&context.env, &context.props).enabled();
    log::debug!("Segment enabled: {enabled}");
    Ok(enabled)
}
