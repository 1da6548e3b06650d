use super::*;

/// Script in the indexer's snake_case field naming.
#[derive(Debug, PartialEq, Serialize)]
struct RpcScript<'a> {
  code_hash: Byte32,
  hash_type: HashType,
  args: &'a Bytes,
}

impl<'a> From<&'a Script> for RpcScript<'a> {
  fn from(script: &'a Script) -> Self {
    Self {
      code_hash: script.code_hash,
      hash_type: script.hash_type,
      args: &script.args,
    }
  }
}

#[derive(Debug, PartialEq, Serialize)]
struct SearchKeyFilter<'a> {
  script: Option<RpcScript<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  output_data_len_range: Option<[&'static str; 2]>,
}

impl SearchKeyFilter<'_> {
  /// Cells without a type script and with empty data.
  fn plain() -> Self {
    Self {
      script: None,
      output_data_len_range: Some(["0x0", "0x1"]),
    }
  }
}

#[derive(Debug, PartialEq, Serialize)]
struct SearchKey<'a> {
  script: RpcScript<'a>,
  script_type: &'static str,
  filter: SearchKeyFilter<'a>,
  with_data: bool,
}

impl<'a> From<&'a CellFilter> for SearchKey<'a> {
  fn from(filter: &'a CellFilter) -> Self {
    Self {
      script: (&filter.lock).into(),
      script_type: "lock",
      filter: match &filter.type_ {
        Some(type_) => SearchKeyFilter {
          script: Some(type_.into()),
          output_data_len_range: None,
        },
        None => SearchKeyFilter::plain(),
      },
      with_data: true,
    }
  }
}

#[derive(Debug, Deserialize)]
struct Page {
  objects: Vec<IndexerCell>,
  last_cursor: Bytes,
}

impl Page {
  /// Move this page's cells into `cells` and return the cursor of the next
  /// page. A short page or an empty cursor ends the listing.
  fn drain_into(self, cells: &mut Vec<IndexerCell>, page_size: usize) -> Option<Bytes> {
    let last = self.objects.len() < page_size || self.last_cursor.is_empty();

    cells.extend(self.objects);

    (!last).then_some(self.last_cursor)
  }
}

/// Collector backed by a CKB node's indexer `get_cells` method.
#[derive(Debug, Clone)]
pub struct IndexerCollector {
  client: JsonRpcClient,
  page_size: u32,
}

impl IndexerCollector {
  pub const PAGE_SIZE: u32 = 100;

  pub fn new(url: &str) -> Result<Self> {
    Ok(Self {
      client: JsonRpcClient::new(url)?,
      page_size: Self::PAGE_SIZE,
    })
  }

  fn params<'a>(
    &self,
    filter: &'a CellFilter,
    cursor: Option<&'a Bytes>,
  ) -> (SearchKey<'a>, &'static str, String, Option<&'a Bytes>) {
    (
      filter.into(),
      "asc",
      format!("{:#x}", self.page_size),
      cursor,
    )
  }
}

impl Collector for IndexerCollector {
  async fn get_cells(&self, filter: &CellFilter) -> Result<Vec<IndexerCell>> {
    let page_size = usize::try_from(self.page_size)?;
    let mut cells = Vec::new();
    let mut cursor = None;

    loop {
      let page: Page = self
        .client
        .call("get_cells", self.params(filter, cursor.as_ref()))
        .await?;

      match page.drain_into(&mut cells, page_size) {
        Some(next) => cursor = Some(next),
        None => break,
      }
    }

    log::debug!(
      "Indexer at {} returned {} live cells",
      self.client.url(),
      cells.len()
    );

    Ok(cells)
  }
}
