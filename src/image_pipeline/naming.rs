//! Output path derivation
//!
//! `<stem>_s.<ext>` becomes `<stem>_mr.png`. Only a trailing `_s` on the file
//! stem is rewritten; a stem without one gets `_mr` appended, so the output
//! never lands on the input path.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const SPECULAR_SUFFIX: &str = "_s";
const METALLIC_ROUGHNESS_SUFFIX: &str = "_mr";
const OUTPUT_EXTENSION: &str = "png";

pub fn derive_output_path<P: AsRef<Path>>(input_path: P) -> PathBuf {
    let input_path = input_path.as_ref();
    let stem = input_path.file_stem().unwrap_or_default();

    let mut file_name = OsString::from(strip_specular_suffix(stem));
    file_name.push(METALLIC_ROUGHNESS_SUFFIX);
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);

    input_path.with_file_name(file_name)
}

/// Removes a trailing `_s` from `stem` without decoding it, so names that
/// are not valid UTF-8 keep their exact bytes.
fn strip_specular_suffix(stem: &OsStr) -> &OsStr {
    match stem.as_encoded_bytes().strip_suffix(SPECULAR_SUFFIX.as_bytes()) {
        // SAFETY: the bytes come from `as_encoded_bytes` and are cut right
        // before an ASCII character, which is a valid split point.
        Some(base) => unsafe { OsStr::from_encoded_bytes_unchecked(base) },
        None => stem,
    }
}
