//! List rules and stored regulations

use regimed::api;
use regimed::config::Config;
use regimed::output::{OutputMode, RegulationListResult, RuleListResult};

/// Print the active rules
pub fn rules(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let rules = api::list_rules(&config.rule_source())?;
    print!("{}", RuleListResult { rules }.format(mode));
    Ok(())
}

/// Print the stored regulation snapshot
pub fn regulations(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let regulations = api::list_regulations(&config.regulation_store())?;
    print!("{}", RegulationListResult { regulations }.format(mode));
    Ok(())
}
