use super::*;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DepType {
  #[default]
  Code,
  #[serde(alias = "dep_group")]
  DepGroup,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDep {
  #[serde(alias = "out_point")]
  pub out_point: OutPoint,
  #[serde(alias = "dep_type")]
  pub dep_type: DepType,
}
