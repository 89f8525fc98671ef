use strk_calldata_config::DeployConfig;
use strk_calldata_types::CalldataValue;

/// Builds the argv of the external `sncast deploy` invocation, with the
/// assembled calldata appended as trailing arguments.
pub fn sncast_deploy_command(config: &DeployConfig, calldata: &[CalldataValue]) -> Vec<String> {
    let mut argv = vec![
        "sncast".to_owned(),
        "--account".to_owned(),
        config.account.clone(),
        "deploy".to_owned(),
        "--url".to_owned(),
        config.rpc_url.to_string(),
        "--class-hash".to_owned(),
        config.class_hash.to_string(),
        "--constructor-calldata".to_owned(),
    ];
    argv.extend(calldata.iter().map(ToString::to_string));
    argv
}
