use initra_cli::commands::page::{self, strip_page_suffix, PageOptions, PageTarget};
use initra_cli::commands::templates::Language;
use initra_cli::error::InitraError;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

// ── suffix stripping ────────────────────────────────────────────────

#[test]
fn strip_page_suffix_variants() {
    assert_eq!(strip_page_suffix("UserPage"), "User");
    assert_eq!(strip_page_suffix("userpage"), "user");
    assert_eq!(strip_page_suffix("user-page"), "user");
    assert_eq!(strip_page_suffix("user_PAGE"), "user");
    assert_eq!(strip_page_suffix("Dashboard"), "Dashboard");
}

#[test]
fn strip_page_suffix_keeps_bare_page() {
    assert_eq!(strip_page_suffix("Page"), "Page");
    assert_eq!(strip_page_suffix("-page"), "-page");
}

#[test]
fn strip_page_suffix_multibyte_input() {
    assert_eq!(strip_page_suffix("日本"), "日本");
    assert_eq!(strip_page_suffix("ÜberPage"), "Über");
    assert_eq!(strip_page_suffix("pagé"), "pagé");
}

// ── React ───────────────────────────────────────────────────────────

#[test]
#[serial]
fn react_page_default_location() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let path = page::run("Dashboard", &PageOptions::default()).unwrap();
    assert_eq!(path, Path::new("src/pages/DashboardPage.tsx"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("const DashboardPage: React.FC = () => {"));
}

#[test]
#[serial]
fn react_page_strips_suffix_before_casing() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let path = page::run("SettingsPage", &PageOptions::default()).unwrap();
    assert_eq!(path, Path::new("src/pages/SettingsPage.tsx"));
    assert!(!Path::new("src/pages/SettingsPagePage.tsx").exists());
}

#[test]
#[serial]
fn react_page_with_css_and_test() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let opts = PageOptions {
        css: true,
        test: true,
        language: Language::JavaScript,
        ..Default::default()
    };
    page::run("profile", &opts).unwrap();
    assert!(Path::new("src/pages/ProfilePage.jsx").exists());
    assert!(Path::new("src/pages/ProfilePage.scss").exists());
    assert!(Path::new("src/pages/ProfilePage.test.jsx").exists());
}

#[test]
#[serial]
fn react_page_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    page::run("Home", &PageOptions::default()).unwrap();
    let err = page::run("HomePage", &PageOptions::default()).unwrap_err();
    assert!(matches!(err, InitraError::AlreadyExists(_)));
}

#[test]
#[serial]
fn react_page_existing_test_file_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    fs::create_dir_all("src/pages").unwrap();
    fs::write("src/pages/HomePage.test.tsx", "// keep").unwrap();

    let opts = PageOptions {
        css: true,
        test: true,
        ..Default::default()
    };
    let err = page::run("Home", &opts).unwrap_err();
    assert!(matches!(err, InitraError::AlreadyExists(ref p) if p.ends_with("HomePage.test.tsx")));
    assert!(!Path::new("src/pages/HomePage.tsx").exists());
    assert!(!Path::new("src/pages/HomePage.scss").exists());
}

// ── Next.js ─────────────────────────────────────────────────────────

#[test]
#[serial]
fn next_page_writes_segment_files() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let opts = PageOptions {
        target: PageTarget::Next,
        ..Default::default()
    };
    let path = page::run("UserSettings", &opts).unwrap();
    assert_eq!(path, Path::new("app/user-settings/page.tsx"));
    assert!(Path::new("app/user-settings/loading.tsx").exists());
    assert!(Path::new("app/user-settings/error.tsx").exists());
    assert!(!Path::new("app/user-settings/user-settings.scss").exists());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("export default function UserSettingsPage() {"));
}

#[test]
#[serial]
fn next_page_optional_files_and_custom_base() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let opts = PageOptions {
        target: PageTarget::Next,
        path: Some(PathBuf::from("src/app")),
        css: true,
        test: true,
        ..Default::default()
    };
    page::run("blog", &opts).unwrap();
    assert!(Path::new("src/app/blog/page.tsx").exists());
    assert!(Path::new("src/app/blog/blog.scss").exists());
    let test = fs::read_to_string("src/app/blog/page.test.tsx").unwrap();
    assert!(test.contains("import BlogPage from './page';"));
}
