use super::*;

/// Source of raw thread payloads.
///
/// The pipeline only needs the bytes of the canonical JSON document; any
/// transport, timeout or status handling lives behind this seam.
pub(crate) trait Fetch {
  fn fetch(
    &self,
    reference: &ThreadReference,
  ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}
