#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DataIndex {
  Body,
  Title,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Column {
  pub(crate) data_index: DataIndex,
  pub(crate) header: &'static str,
}

impl Column {
  pub(crate) fn stories() -> &'static [Column] {
    &[
      Column {
        header: "Link",
        data_index: DataIndex::Body,
      },
      Column {
        header: "Description",
        data_index: DataIndex::Title,
      },
    ]
  }
}
