use crate::byte_array::ByteArray;
use itertools::Itertools;
use strk_calldata_config::DeployConfig;
use strk_calldata_types::CalldataValue;

/// Assembles the flat positional constructor calldata for the vault.
///
/// Layout, in order: `name` (ByteArray), `symbol` (ByteArray), `asset`,
/// `access_control`, `allowed_pools` (count, then `pool_id`/`max_weight`/
/// `v_token` per pool), `settings` (`default_pool_index`, `fee_bps`,
/// `fee_receiver`), `oracle`.
pub fn build_constructor_calldata(config: &DeployConfig) -> Vec<CalldataValue> {
    let mut calldata = Vec::new();

    ByteArray::from(config.name.as_str()).extend_calldata(&mut calldata);
    ByteArray::from(config.symbol.as_str()).extend_calldata(&mut calldata);

    calldata.push(config.asset.into());
    calldata.push(config.access_control.into());

    calldata.push((config.allowed_pools.len() as u64).into());
    for pool in &config.allowed_pools {
        calldata.push(pool.pool_id.into());
        calldata.push(pool.max_weight.into());
        calldata.push(pool.v_token.into());
    }

    calldata.push(config.settings.default_pool_index.into());
    calldata.push(config.settings.fee_bps.into());
    calldata.push(config.settings.fee_receiver.into());

    calldata.push(config.oracle.into());

    tracing::debug!(len = calldata.len(), "assembled constructor calldata");
    calldata
}

/// Renders the calldata file: one value per line, no blank lines, no trailing
/// newline.
pub fn render_calldata_file(calldata: &[CalldataValue]) -> String {
    calldata.iter().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strk_calldata_config::PoolProps;
    use strk_calldata_types::Felt;

    #[test]
    fn default_config_produces_the_known_sixteen_lines() {
        let calldata = build_constructor_calldata(&DeployConfig::default());
        let lines: Vec<String> = calldata.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                // name: "Numo Vault wBTC" (15 bytes, pending word only)
                "0",
                "0x4e756d6f205661756c74207742544300000000000000000000000000000000",
                "15",
                // symbol: "NVwBTC" (6 bytes, pending word only)
                "0",
                "0x4e567742544300000000000000000000000000000000000000000000000000",
                "6",
                // asset, access_control (written full-width, leading zero kept)
                "0x03fe2b97c1fd336e750087d68b9b867997fd64a2661ff3ca5a7c771641e8e7ac",
                "0x038d9c69eed034ba4765920f7b3c9d57acf8ef447230c4529ddea660d42a6487",
                // allowed_pools: one entry
                "1",
                "0x451fe483d5921a2919ddd81d0de6696669bccdacd859f72a4fba7656b97c3b5",
                "10000",
                "0x4ecb0667140b9f45b067d026953ed79f22723f1cfac05a7b26c3ac06c88f56c",
                // settings
                "0",
                "100",
                "0x0466617918874f335728dbe0903376d1d9756137dd70e927164af4855e1ddae1",
                // oracle
                "0xfe4bfb1b353ba51eb34dff963017f94af5a5cf8bdf3dfc191c504657f3c05",
            ]
        );
    }

    #[test]
    fn long_name_takes_the_multi_word_path() {
        let mut config = DeployConfig::default();
        config.name = "a".repeat(62);
        let calldata = build_constructor_calldata(&config);

        assert_eq!(calldata[0].to_string(), "2");
        // data_len, two words, pending word, pending_word_len.
        assert_eq!(calldata[3].to_string().len(), 64);
        assert_eq!(calldata[4].to_string(), "0");
        // The symbol ByteArray starts right after.
        assert_eq!(calldata[5].to_string(), "0");
    }

    #[test]
    fn pool_array_is_count_prefixed() {
        let mut config = DeployConfig::default();
        config.allowed_pools.push(PoolProps {
            pool_id: Felt::from_hex("0xaaa").unwrap(),
            max_weight: 5_000,
            v_token: Felt::from_hex("0xbbb").unwrap(),
        });
        let calldata = build_constructor_calldata(&config);
        let lines: Vec<String> = calldata.iter().map(ToString::to_string).collect();
        assert_eq!(lines[8], "2");
        assert_eq!(lines[12], "0xaaa");
        assert_eq!(lines[13], "5000");
        assert_eq!(lines[14], "0xbbb");
        assert_eq!(calldata.len(), 19);
    }

    #[test]
    fn rendered_file_has_one_value_per_line_and_no_blanks() {
        let calldata = build_constructor_calldata(&DeployConfig::default());
        let rendered = render_calldata_file(&calldata);
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|line| !line.is_empty()));
        assert!(!rendered.ends_with('\n'));
    }
}
