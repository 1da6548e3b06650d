//! Molecule framing for the handful of layouts transaction assembly needs.
//!
//! Fixed-size structs are plain concatenations and are built inline by their
//! types. Dynamic values use a `fixvec` (item count followed by items) or a
//! `table` (total size, one offset per field, then the fields), with every
//! header number a little-endian `u32`.

pub const NUMBER_SIZE: usize = 4;

#[allow(clippy::cast_possible_truncation)]
fn number(n: usize) -> [u8; NUMBER_SIZE] {
  (n as u32).to_le_bytes()
}

pub fn bytes(data: &[u8]) -> Vec<u8> {
  let mut buffer = Vec::with_capacity(NUMBER_SIZE + data.len());
  buffer.extend_from_slice(&number(data.len()));
  buffer.extend_from_slice(data);
  buffer
}

/// An absent option serializes to nothing.
pub fn bytes_opt(data: Option<&[u8]>) -> Vec<u8> {
  data.map(bytes).unwrap_or_default()
}

pub fn table(fields: &[&[u8]]) -> Vec<u8> {
  let header = NUMBER_SIZE * (fields.len() + 1);
  let total = header + fields.iter().map(|field| field.len()).sum::<usize>();

  let mut buffer = Vec::with_capacity(total);
  buffer.extend_from_slice(&number(total));

  let mut offset = header;
  for field in fields {
    buffer.extend_from_slice(&number(offset));
    offset += field.len();
  }

  for field in fields {
    buffer.extend_from_slice(field);
  }

  buffer
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_bytes() {
    assert_eq!(bytes(&[]), [0, 0, 0, 0]);
  }

  #[test]
  fn bytes_are_length_prefixed() {
    assert_eq!(bytes(&[0xab, 0xcd]), [2, 0, 0, 0, 0xab, 0xcd]);
  }

  #[test]
  fn none_is_empty() {
    assert!(bytes_opt(None).is_empty());
    assert_eq!(bytes_opt(Some(&[][..])), [0, 0, 0, 0]);
  }

  #[test]
  fn table_of_empty_fields_is_header_only() {
    assert_eq!(
      hex::encode(table(&[&[], &[], &[]])),
      "10000000100000001000000010000000"
    );
  }

  #[test]
  fn table_offsets_follow_field_lengths() {
    assert_eq!(
      table(&[&[1], &[2, 3]]),
      [15, 0, 0, 0, 12, 0, 0, 0, 13, 0, 0, 0, 1, 2, 3]
    );
  }

  #[test]
  fn empty_table() {
    assert_eq!(table(&[]), [4, 0, 0, 0]);
  }
}
