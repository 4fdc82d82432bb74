use crate::core::{
    command_init::{CommandOptions, SegmentCommandInit},
    config::SegmentOption,
    error::Result,
    output::format_option_line,
};

/// List every option with the value a render would use
pub fn execute_options(options: &CommandOptions) -> Result<()> {
    let props = SegmentCommandInit::properties(options)?;
    for option in SegmentOption::ALL {
        println!(
            "{}",
            format_option_line(option.key(), &props.effective_value(option))
        );
    }
    Ok(())
}
