//! Photo gallery index (`images.yaml`)

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use crate::content::{ContentError, Result};
use crate::filter::Tagged;
use crate::helpers::url_join;

/// Extensions picked up when indexing a directory
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

const DEFAULT_TAG: &str = "photography";
const UNKNOWN_LOCATION: &str = "Unknown Location";

/// One photo of the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub name: String,
    pub src: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Tagged for GalleryImage {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl GalleryImage {
    fn matches_query(&self, query_lower: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(query_lower);
        contains(&self.name)
            || self.description.as_deref().is_some_and(contains)
            || self.location.as_deref().is_some_and(contains)
            || self.tags.iter().any(|t| contains(t))
    }
}

/// Gallery query: every tag must match, then free-text search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageFilter {
    pub tags: Vec<String>,
    pub search_query: String,
}

/// The whole gallery index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

impl Gallery {
    /// Load the index; a missing file is an empty gallery
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No gallery index at {:?}", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| ContentError::Gallery {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the index as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self).map_err(|e| ContentError::Gallery {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ContentError::io(parent, e))?;
        }
        fs::write(path, yaml).map_err(|e| ContentError::io(path, e))
    }

    /// Images passing the filter, in index order
    pub fn filter(&self, filter: &ImageFilter) -> Vec<&GalleryImage> {
        let query = filter.search_query.trim().to_lowercase();
        crate::filter::filter_by_tags(&self.images, &filter.tags)
            .into_iter()
            .filter(|image| query.is_empty() || image.matches_query(&query))
            .collect()
    }

    /// Sorted tag vocabulary
    pub fn tags(&self) -> Vec<String> {
        let tags: BTreeSet<&String> = self.images.iter().flat_map(|i| &i.tags).collect();
        tags.into_iter().cloned().collect()
    }

    /// First image whose `src` ends in `/{filename}`
    pub fn by_filename(&self, filename: &str) -> Option<&GalleryImage> {
        let suffix = format!("/{}", filename);
        self.images.iter().find(|img| img.src.ends_with(&suffix))
    }

    /// Build an index for every image file in `dir`
    ///
    /// Entries of `existing` with the same `src` keep their curated
    /// fields. The result is sorted newest first.
    pub fn index_directory<P: AsRef<Path>>(
        dir: P,
        url_prefix: &str,
        existing: &Gallery,
    ) -> Result<Self> {
        let dir = dir.as_ref();
        let curated: HashMap<&str, &GalleryImage> = existing
            .images
            .iter()
            .map(|img| (img.src.as_str(), img))
            .collect();

        let mut images = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| ContentError::io(dir, e))? {
            let entry = entry.map_err(|e| ContentError::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() || !is_image(&path) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };

            let src = url_join(url_prefix, &[file_name]);
            if let Some(known) = curated.get(src.as_str()) {
                images.push((*known).clone());
                continue;
            }

            let name = readable_name(&path);
            let date = fs::metadata(&path)
                .and_then(|m| m.modified())
                .ok()
                .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d").to_string());
            tracing::debug!("Indexed new gallery image {}", src);

            images.push(GalleryImage {
                description: Some(name.clone()),
                name,
                src,
                tags: vec![DEFAULT_TAG.to_string()],
                date,
                location: Some(UNKNOWN_LOCATION.to_string()),
            });
        }

        // ISO dates order lexically; ties fall back to src for stable output
        images.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.src.cmp(&b.src)));
        Ok(Self { images })
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// `sunset_over-lake.jpg` -> `Sunset Over Lake`
fn readable_name(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    stem.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Gallery {
        serde_yaml::from_str(
            r#"
images:
  - name: Golden Gate
    src: /images/clicks/golden-gate.jpg
    tags: [travel, bridges]
    description: Fog rolling in
    location: San Francisco
  - name: Morning Coffee
    src: /images/clicks/coffee.png
    tags: [food]
  - name: Harbor
    src: /images/clicks/harbor.jpg
    tags: [travel]
    location: Kochi
"#,
        )
        .unwrap()
    }

    fn names(images: &[&GalleryImage]) -> Vec<String> {
        images.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_filter_by_tags() {
        let gallery = sample();
        let filter = ImageFilter {
            tags: vec!["travel".into()],
            search_query: String::new(),
        };
        assert_eq!(names(&gallery.filter(&filter)), vec!["Golden Gate", "Harbor"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let gallery = sample();
        let by_location = ImageFilter {
            tags: vec![],
            search_query: "KOCHI".into(),
        };
        assert_eq!(names(&gallery.filter(&by_location)), vec!["Harbor"]);

        let by_description = ImageFilter {
            tags: vec!["travel".into()],
            search_query: "fog".into(),
        };
        assert_eq!(names(&gallery.filter(&by_description)), vec!["Golden Gate"]);

        let by_tag = ImageFilter {
            tags: vec![],
            search_query: "foo".into(),
        };
        assert_eq!(names(&gallery.filter(&by_tag)), vec!["Morning Coffee"]);
    }

    #[test]
    fn test_tags_and_lookup() {
        let gallery = sample();
        assert_eq!(gallery.tags(), vec!["bridges", "food", "travel"]);
        assert_eq!(
            gallery.by_filename("coffee.png").map(|i| i.name.as_str()),
            Some("Morning Coffee")
        );
        assert!(gallery.by_filename("offee.png").is_none());
    }

    #[test]
    fn test_load_missing_and_malformed() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            Gallery::load(tmp.path().join("images.yaml")).unwrap(),
            Gallery::default()
        );

        let bad = tmp.path().join("bad.yaml");
        fs::write(&bad, "images: [name: {").unwrap();
        assert!(matches!(
            Gallery::load(&bad),
            Err(ContentError::Gallery { .. })
        ));
    }

    #[test]
    fn test_index_directory_keeps_curated() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("golden-gate.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("new_photo-day.PNG"), b"x").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"x").unwrap();

        let indexed = Gallery::index_directory(tmp.path(), "/images/clicks", &sample()).unwrap();
        assert_eq!(indexed.images.len(), 2);

        let curated = indexed.by_filename("golden-gate.jpg").unwrap();
        assert_eq!(curated.location.as_deref(), Some("San Francisco"));

        let fresh = indexed.by_filename("new_photo-day.PNG").unwrap();
        assert_eq!(fresh.name, "New Photo Day");
        assert_eq!(fresh.src, "/images/clicks/new_photo-day.PNG");
        assert_eq!(fresh.tags, vec!["photography"]);
        assert!(fresh.date.is_some());
    }

    #[test]
    fn test_save_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("content/images.yaml");
        sample().save(&path).unwrap();
        assert_eq!(Gallery::load(&path).unwrap(), sample());
    }

    #[test]
    fn test_readable_name() {
        assert_eq!(readable_name(Path::new("sunset_over-lake.jpg")), "Sunset Over Lake");
        assert_eq!(readable_name(Path::new("IMG__01.png")), "IMG 01");
    }
}
