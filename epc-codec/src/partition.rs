//! GS1 partition pattern codec
//!
//! A partition field is a 3-bit selector followed by two adjacent numeric
//! fields whose bit widths depend on the selected table row. The selector
//! trades 3 bits for variable-width packing, so company prefixes of 6 to
//! 12 digits and their counterpart field always fit the same total width.

use epc_core::{BitBuffer, EpcError, EpcResult};

/// One row of a partition table: the bit width and maximum decimal digit
/// count of field 1 (company prefix) and field 2 (item reference or
/// extension+serial).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionEntry {
    pub bits1: usize,
    pub digits1: usize,
    pub bits2: usize,
    pub digits2: usize,
}

/// Decode a partition field starting at `first_bit`.
///
/// Returns the partition selector and both values rendered as decimal
/// strings left-zero-padded to the row's digit counts. Padding is the
/// only adjustment: a value whose decimal rendering is longer than the
/// digit count (possible only on malformed binary) keeps all its digits.
///
/// # Errors
///
/// Returns `EpcError::Format` if the selector has no entry in `table`.
pub fn decode_partition(
    buffer: &BitBuffer,
    first_bit: usize,
    table: &[PartitionEntry],
) -> EpcResult<(u8, String, String)> {
    let partition = buffer.read_byte(first_bit, 3)?;
    let entry = table
        .get(partition as usize)
        .ok_or_else(|| EpcError::Format(format!("Partition {} not defined", partition)))?;

    let num1 = buffer.read_uint(first_bit + 3, entry.bits1)?;
    let num2 = buffer.read_uint(first_bit + 3 + entry.bits1, entry.bits2)?;

    let val1 = format!("{:0width$}", num1, width = entry.digits1);
    let val2 = format!("{:0width$}", num2, width = entry.digits2);
    Ok((partition, val1, val2))
}

/// Encode a partition field starting at `first_bit`: the 3-bit selector,
/// then both values, contiguous with no gaps.
///
/// # Errors
///
/// Returns `EpcError::Format` if the selector has no entry in `table`,
/// if a value is not decimal, or if a value (leading zeros stripped) has
/// more digits than its field allows.
pub fn encode_partition(
    buffer: &mut BitBuffer,
    first_bit: usize,
    table: &[PartitionEntry],
    partition: u8,
    val1: &str,
    val2: &str,
) -> EpcResult<()> {
    let entry = table
        .get(partition as usize)
        .ok_or_else(|| EpcError::Format(format!("Partition {} not defined", partition)))?;

    let num1 = parse_field_value(val1, entry.digits1)?;
    let num2 = parse_field_value(val2, entry.digits2)?;

    buffer.write_byte(partition, first_bit, 3)?;
    buffer.write_uint(num1, first_bit + 3, entry.bits1)?;
    buffer.write_uint(num2, first_bit + 3 + entry.bits1, entry.bits2)?;
    Ok(())
}

/// Partition number for a company prefix of the specified length.
///
/// The length-to-partition mapping is fixed by the standard and shared by
/// all schemes: a 12-digit prefix selects partition 0, an 11-digit prefix
/// partition 1, down to a 6-digit prefix selecting partition 6.
///
/// # Errors
///
/// Returns `EpcError::Format` for lengths outside 6 to 12.
pub fn partition_for_prefix_len(company_prefix_len: usize) -> EpcResult<u8> {
    match company_prefix_len {
        12 => Ok(0),
        11 => Ok(1),
        10 => Ok(2),
        9 => Ok(3),
        8 => Ok(4),
        7 => Ok(5),
        6 => Ok(6),
        _ => Err(EpcError::Format(format!(
            "CompanyPrefix has invalid length: {}",
            company_prefix_len
        ))),
    }
}

fn parse_field_value(value: &str, digits: usize) -> EpcResult<u64> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(EpcError::Format(format!(
            "Partition field value is not decimal: {:?}",
            value
        )));
    }

    let stripped = value.trim_start_matches('0');
    if stripped.len() > digits {
        return Err(EpcError::Format(format!(
            "Partition field value {} exceeds {} digits",
            value, digits
        )));
    }

    if stripped.is_empty() {
        return Ok(0);
    }
    stripped
        .parse::<u64>()
        .map_err(|_| EpcError::Format(format!("Partition field value too large: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The SGTIN table rows exercised below match the tag layer's.
    const TABLE: [PartitionEntry; 7] = [
        PartitionEntry { bits1: 40, digits1: 12, bits2: 4, digits2: 1 },
        PartitionEntry { bits1: 37, digits1: 11, bits2: 7, digits2: 2 },
        PartitionEntry { bits1: 34, digits1: 10, bits2: 10, digits2: 3 },
        PartitionEntry { bits1: 30, digits1: 9, bits2: 14, digits2: 4 },
        PartitionEntry { bits1: 27, digits1: 8, bits2: 17, digits2: 5 },
        PartitionEntry { bits1: 24, digits1: 7, bits2: 20, digits2: 6 },
        PartitionEntry { bits1: 20, digits1: 6, bits2: 24, digits2: 7 },
    ];

    #[test]
    fn test_encode_decode_round_trip() {
        let mut buffer = BitBuffer::new(96);
        encode_partition(&mut buffer, 11, &TABLE, 3, "311112347", "0987").unwrap();
        let (partition, val1, val2) = decode_partition(&buffer, 11, &TABLE).unwrap();
        assert_eq!(partition, 3);
        assert_eq!(val1, "311112347");
        assert_eq!(val2, "0987");
    }

    #[test]
    fn test_decode_pads_to_digit_count() {
        let mut buffer = BitBuffer::new(96);
        buffer.write_byte(6, 11, 3).unwrap();
        buffer.write_uint(348338, 14, 20).unwrap();
        buffer.write_uint(42, 34, 24).unwrap();
        let (partition, val1, val2) = decode_partition(&buffer, 11, &TABLE).unwrap();
        assert_eq!(partition, 6);
        assert_eq!(val1, "348338");
        assert_eq!(val2, "0000042");
    }

    #[test]
    fn test_decode_rejects_undefined_partition() {
        let mut buffer = BitBuffer::new(96);
        buffer.write_byte(7, 11, 3).unwrap();
        let result = decode_partition(&buffer, 11, &TABLE);
        assert!(matches!(result, Err(EpcError::Format(_))));
    }

    #[test]
    fn test_encode_rejects_oversized_value() {
        let mut buffer = BitBuffer::new(96);
        // Partition 6 allows 6 company prefix digits
        let result = encode_partition(&mut buffer, 11, &TABLE, 6, "3483381", "0000001");
        assert!(matches!(result, Err(EpcError::Format(_))));
    }

    #[test]
    fn test_encode_ignores_leading_zeros() {
        let mut buffer = BitBuffer::new(96);
        encode_partition(&mut buffer, 11, &TABLE, 0, "300012345678", "0").unwrap();
        let (_, val1, val2) = decode_partition(&buffer, 11, &TABLE).unwrap();
        assert_eq!(val1, "300012345678");
        assert_eq!(val2, "0");
    }

    #[test]
    fn test_encode_rejects_non_decimal() {
        let mut buffer = BitBuffer::new(96);
        let result = encode_partition(&mut buffer, 11, &TABLE, 6, "3483a8", "0000001");
        assert!(matches!(result, Err(EpcError::Format(_))));
    }

    #[test]
    fn test_partition_for_prefix_len() {
        assert_eq!(partition_for_prefix_len(12).unwrap(), 0);
        assert_eq!(partition_for_prefix_len(9).unwrap(), 3);
        assert_eq!(partition_for_prefix_len(6).unwrap(), 6);
        assert!(partition_for_prefix_len(5).is_err());
        assert!(partition_for_prefix_len(13).is_err());
    }
}
