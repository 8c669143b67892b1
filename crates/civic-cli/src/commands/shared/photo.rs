use std::path::Path;

use url::Url;

/// Turn a `--photo` argument into the stored photo reference.
///
/// URLs and anything that is not an existing file are kept verbatim. A local
/// file becomes an absolute, percent-encoded `file://` URI, which is only
/// meaningful on this machine; the image itself is never copied into the store.
pub fn photo_reference(raw: &str) -> String {
    if raw.contains("://") {
        return raw.to_string();
    }

    let path = Path::new(raw);
    if !path.is_file() {
        tracing::debug!(photo = raw, "photo is not a local file; storing as given");
        return raw.to_string();
    }

    let absolute = match path.canonicalize() {
        Ok(absolute) => absolute,
        Err(error) => {
            tracing::warn!(photo = raw, %error, "could not resolve photo path; storing as given");
            return raw.to_string();
        }
    };

    // Handles Windows verbatim (`\\?\`) prefixes from `canonicalize`.
    Url::from_file_path(&absolute).map_or_else(
        |()| {
            tracing::warn!(photo = raw, "photo path has no file URI form; storing as given");
            raw.to_string()
        },
        String::from,
    )
}
