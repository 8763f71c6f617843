use std::str::FromStr;

use hd_core::errors::CoreError;

/// Parse an optional enum flag with the domain's lenient vocabulary.
pub fn parse_optional<T>(raw: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    Ok(raw.map(str::parse).transpose()?)
}
