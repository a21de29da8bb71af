use serde::{Deserialize, Deserializer};
use serde_aux::field_attributes::deserialize_number_from_string;

// game clients echo ids back the way they got them from the category list,
// which means json object keys, i.e. strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct FlexibleId(#[serde(deserialize_with = "deserialize_number_from_string")] pub i64);

// browsers put whatever the user typed into the query string, anything that is not a number
// is treated as if the parameter was absent
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse::<i64>().ok()))
}
