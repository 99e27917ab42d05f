//! Form fields for the upload endpoints.

use std::path::Path;

use crate::error::UploadError;
use crate::transport::FormField;

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Options for `upload_from_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlUploadOptions {
    /// Store the file permanently instead of letting it expire.
    pub store: bool,
    /// Return the token response instead of polling to completion.
    pub async_: bool,
    /// Ask the server to reuse a file already uploaded from this URL.
    pub check_url_duplicates: Option<bool>,
    /// Ask the server to remember this URL for later duplicate checks.
    pub save_url_duplicates: Option<bool>,
    /// Override the stored file name.
    pub filename: Option<String>,
}

impl UrlUploadOptions {
    /// Multipart fields for `from_url/`. `async` is sent only when set; it
    /// also tells the client not to poll.
    pub fn form_fields(&self, public_key: &str, source_url: &str) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("pub_key", public_key),
            FormField::text("source_url", source_url),
            FormField::text("store", flag(self.store)),
        ];
        if let Some(check) = self.check_url_duplicates {
            fields.push(FormField::text("check_URL_duplicates", flag(check)));
        }
        if let Some(save) = self.save_url_duplicates {
            fields.push(FormField::text("save_URL_duplicates", flag(save)));
        }
        if let Some(name) = &self.filename {
            fields.push(FormField::text("filename", name.as_str()));
        }
        if self.async_ {
            fields.push(FormField::text("async", flag(true)));
        }
        fields
    }
}

/// Key and store flag sent with every direct upload.
pub fn upload_params(public_key: &str, store: bool) -> Vec<FormField> {
    vec![
        FormField::text("UPLOADCARE_PUB_KEY", public_key),
        FormField::text("UPLOADCARE_STORE", flag(store)),
    ]
}

/// File part keyed by the file's name.
pub fn file_field(path: &Path) -> Result<FormField, UploadError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| UploadError::InvalidPath(path.to_path_buf()))?;
    Ok(FormField::File {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn upload_params_store_flag() {
        let stored = upload_params("demo", true);
        assert_eq!(stored[0], FormField::text("UPLOADCARE_PUB_KEY", "demo"));
        assert_eq!(stored[1], FormField::text("UPLOADCARE_STORE", "1"));
        assert_eq!(upload_params("demo", false)[1], FormField::text("UPLOADCARE_STORE", "0"));
    }

    #[test]
    fn file_field_keyed_by_file_name() {
        let f = file_field(Path::new("/data/photos/cat.jpg")).unwrap();
        assert_eq!(
            f,
            FormField::File {
                name: "cat.jpg".into(),
                path: PathBuf::from("/data/photos/cat.jpg"),
            }
        );
    }

    #[test]
    fn file_field_rejects_paths_without_name() {
        assert!(matches!(
            file_field(Path::new("/")),
            Err(UploadError::InvalidPath(_))
        ));
    }

    #[test]
    fn url_fields_minimal() {
        let fields = UrlUploadOptions::default().form_fields("demo", "https://example.com/a.png");
        let names: Vec<&str> = fields.iter().map(FormField::name).collect();
        assert_eq!(names, ["pub_key", "source_url", "store"]);
        assert_eq!(fields[2], FormField::text("store", "0"));
        assert!(!fields.iter().any(|f| f.name() == "async"));
    }

    #[test]
    fn url_fields_passthrough_options() {
        let opts = UrlUploadOptions {
            store: true,
            async_: true,
            check_url_duplicates: Some(true),
            save_url_duplicates: Some(false),
            filename: Some("renamed.png".into()),
        };
        let fields = opts.form_fields("demo", "https://example.com/a.png");
        assert!(fields.contains(&FormField::text("store", "1")));
        assert!(fields.contains(&FormField::text("check_URL_duplicates", "1")));
        assert!(fields.contains(&FormField::text("save_URL_duplicates", "0")));
        assert!(fields.contains(&FormField::text("filename", "renamed.png")));
        assert!(fields.contains(&FormField::text("async", "1")));
    }
}
