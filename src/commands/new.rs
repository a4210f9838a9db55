//! Scaffold a new blog post or project

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentKind;
use crate::Folio;

/// Create `<content>/<kind>/<slug>/index.md` plus an empty `assets/`
pub fn create_item(
    folio: &Folio,
    kind: ContentKind,
    title: &str,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from {:?}", title);
    }

    let item_dir = folio.content_dir.join(kind.dir_name()).join(&slug);
    let entry_path = item_dir.join(&folio.config.content.entry_file);

    // Check if file already exists
    if entry_path.exists() {
        anyhow::bail!("File already exists: {:?}", entry_path);
    }

    fs::create_dir_all(item_dir.join("assets"))?;
    let today = chrono::Local::now().date_naive();
    fs::write(&entry_path, scaffold(kind, title, &today.to_string()))?;

    println!("Created: {:?}", entry_path);
    Ok(entry_path)
}

fn scaffold(kind: ContentKind, title: &str, date: &str) -> String {
    let title = title.replace('\\', "\\\\").replace('"', "\\\"");
    let kind_fields = match kind {
        ContentKind::Blog => "techStack: []\n",
        ContentKind::Project => "tags: []\ngithubUrl: \"\"\ndemoUrl: \"\"\n",
    };
    format!(
        "---\ntitle: \"{}\"\ndate: {}\nexcerpt: \"\"\n# coverImage: ./assets/cover.jpg\n{}isFeatured: false\n---\n\n",
        title, date, kind_fields
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LoadStatus;
    use tempfile::TempDir;

    #[test]
    fn test_create_item_loads_back() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        let path = create_item(&folio, ContentKind::Project, "My \"Great\" Tool", None).unwrap();
        assert!(path.ends_with("projects/my-great-tool/index.md"));
        assert!(path.parent().unwrap().join("assets").is_dir());

        let item = folio
            .repository()
            .load_item(ContentKind::Project, "my-great-tool");
        assert_eq!(item.status, LoadStatus::Loaded);
        assert_eq!(item.title, "My \"Great\" Tool");
        assert!(item.tags.is_empty());
        assert_eq!(item.cover_image, "/images/default-project-cover.svg");
    }

    #[test]
    fn test_create_item_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        create_item(&folio, ContentKind::Blog, "Hello", Some("hello")).unwrap();
        assert!(create_item(&folio, ContentKind::Blog, "Hello again", Some("hello")).is_err());
    }

    #[test]
    fn test_create_item_needs_slug() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(create_item(&folio, ContentKind::Blog, "!!!", None).is_err());
    }
}
