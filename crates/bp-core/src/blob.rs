/// Emitted byte-literal text for one array, with its byte count.
///
/// The count is accumulated while encoding, never recomputed from the
/// text.
#[derive(Debug, Clone)]
pub struct CompiledBlob {
    pub name: String,
    pub text: String,
    pub bytes: usize,
}
