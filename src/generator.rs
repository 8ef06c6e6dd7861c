use crate::template::{Template, Variant};
use std::{fs, path::Path};

/// Writes the metadata of `count` items derived from `template` into `out_dir`,
/// as `1.json` through `{count}.json`. The directory is created if it doesn't exist,
/// and existing files with the same names are overwritten.
///
/// Stops at the first failure, leaving the files written so far in place.
/// Returns the amount of files written.
pub fn generate<P: AsRef<Path>>(
    template: &Template,
    variant: Variant,
    count: u32,
    out_dir: P,
    pretty: bool,
) -> Result<u32, errors::GenerateError> {
    let out_dir = out_dir.as_ref();

    fs::create_dir_all(out_dir)
        .map_err(|e| errors::GenerateError::CreateDir(out_dir.to_path_buf(), e))?;

    for index in 1..=count {
        let item = template.item(variant, index);

        let contents = if pretty {
            serde_json::to_string_pretty(&item)
        } else {
            serde_json::to_string(&item)
        }
        .map_err(|e| errors::GenerateError::Serialize(index, e))?;

        let path = out_dir.join(format!("{index}.json"));
        fs::write(&path, contents).map_err(|e| errors::GenerateError::Write(path.clone(), e))?;

        log::debug!("wrote {}", path.display());
    }

    log::info!(
        "generated {count} {variant} metadata file(s) in {}",
        out_dir.display()
    );

    Ok(count)
}

/// Errors that can occur when generating metadata
pub mod errors {
    use std::path::PathBuf;
    use thiserror::Error;

    /// Errors that can occur when generating metadata
    #[derive(Debug, Error)]
    #[non_exhaustive]
    pub enum GenerateError {
        /// The output directory could not be created
        #[error("error creating output directory {}", .0.display())]
        CreateDir(PathBuf, #[source] std::io::Error),

        /// An item could not be serialized
        #[error("error serializing metadata of item {0}")]
        Serialize(u32, #[source] serde_json::Error),

        /// A metadata file could not be written
        #[error("error writing metadata file {}", .0.display())]
        Write(PathBuf, #[source] std::io::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Template {
        Template {
            name: "Item #".to_string(),
            description: None,
            external_url: None,
            image: "ipfs://X".to_string(),
        }
    }

    fn read(dir: &Path, index: u32) -> serde_json::Value {
        let contents = fs::read_to_string(dir.join(format!("{index}.json"))).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    #[test]
    fn writes_one_file_per_item() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("json");

        let written = generate(&template(), Variant::NameSuffix, 5, &out, false).unwrap();
        assert_eq!(written, 5);

        let mut names = fs::read_dir(&out)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        names.sort();

        assert_eq!(names, ["1.json", "2.json", "3.json", "4.json", "5.json"]);

        for index in 1..=5 {
            let item = read(&out, index);
            assert_eq!(item["name"], format!("Item #{index}"));
            assert_eq!(item["image"], format!("ipfs://X/{index}.png"));
            assert!(item.get("level").is_none());
        }
    }

    #[test]
    fn level_variant() {
        let dir = tempfile::tempdir().unwrap();

        generate(&template(), Variant::Level, 3, dir.path(), false).unwrap();

        for index in 1..=3 {
            let item = read(dir.path(), index);
            assert_eq!(item["name"], "Item #");
            assert_eq!(item["level"], index.to_string());
            assert_eq!(item["image"], format!("ipfs://X/{index}.png"));
        }
    }

    #[test]
    fn zero_count_creates_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("json");

        let written = generate(&template(), Variant::NameSuffix, 0, &out, false).unwrap();

        assert_eq!(written, 0);
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.json"), "stale").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        generate(&template(), Variant::NameSuffix, 1, dir.path(), false).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("1.json")).unwrap(),
            r#"{"name":"Item #1","image":"ipfs://X/1.png"}"#
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn pretty_output() {
        let dir = tempfile::tempdir().unwrap();

        generate(&template(), Variant::NameSuffix, 1, dir.path(), true).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("1.json")).unwrap(),
            "{\n  \"name\": \"Item #1\",\n  \"image\": \"ipfs://X/1.png\"\n}"
        );
    }

    #[test]
    fn directory_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("json");
        fs::write(&out, "not a directory").unwrap();

        let err = generate(&template(), Variant::NameSuffix, 1, &out, false).unwrap_err();

        assert!(matches!(err, errors::GenerateError::CreateDir(path, _) if path == out));
    }

    #[test]
    fn stops_at_first_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("3.json")).unwrap();

        let err = generate(&template(), Variant::NameSuffix, 5, dir.path(), false).unwrap_err();

        assert!(matches!(
            err,
            errors::GenerateError::Write(path, _) if path.ends_with("3.json")
        ));
        assert!(dir.path().join("1.json").is_file());
        assert!(dir.path().join("2.json").is_file());
        assert!(!dir.path().join("4.json").exists());
        assert!(!dir.path().join("5.json").exists());
    }
}
