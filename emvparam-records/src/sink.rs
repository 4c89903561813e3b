//! Kernel sink trait
//!
//! The boundary between encoded records and the EMV kernel that consumes
//! them. Implementations wrap the vendor SDK's parameter-set call.

use emvparam_core::EmvParamResult;

use crate::kind::RecordKind;

/// Receiver of finalized parameter records
pub trait KernelSink {
    /// Hand one finalized record to the kernel
    ///
    /// # Arguments
    ///
    /// * `kind` - Kind of the record
    /// * `record` - Concatenated TLV elements, never empty
    ///
    /// # Returns
    ///
    /// Returns `EmvParamError::Sink` if the kernel rejects the record
    fn load(&mut self, kind: RecordKind, record: &[u8]) -> EmvParamResult<()>;
}

/// Collects records in memory
impl KernelSink for Vec<(RecordKind, Vec<u8>)> {
    fn load(&mut self, kind: RecordKind, record: &[u8]) -> EmvParamResult<()> {
        self.push((kind, record.to_vec()));
        Ok(())
    }
}

impl<S: KernelSink + ?Sized> KernelSink for &mut S {
    fn load(&mut self, kind: RecordKind, record: &[u8]) -> EmvParamResult<()> {
        (**self).load(kind, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<(RecordKind, Vec<u8>)> = Vec::new();
        sink.load(RecordKind::ExceptionList, &[0x5A, 0x01, 0x47]).unwrap();
        assert_eq!(sink, vec![(RecordKind::ExceptionList, vec![0x5A, 0x01, 0x47])]);
    }
}
