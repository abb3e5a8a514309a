use initra_cli::commands::project::Framework;
use initra_cli::commands::route::{self, plan, resolve_method, RouteOptions};
use initra_cli::commands::templates::route::HttpMethod;
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

fn write_package_json(deps: &str) {
    fs::write(
        "package.json",
        format!(r#"{{ "name": "app", "dependencies": {{ {deps} }} }}"#),
    )
    .unwrap();
}

fn api_opts() -> RouteOptions {
    RouteOptions {
        api: true,
        ..Default::default()
    }
}

// ── path planning ───────────────────────────────────────────────────

#[test]
fn plan_next_api() {
    let files = plan("users", &api_opts(), Framework::Next);
    assert_eq!(files.main, Path::new("src/app/api/users/route.ts"));
    assert_eq!(files.stylesheet, None);
    assert_eq!(files.url, "/api/users");
}

#[test]
fn plan_next_api_nested() {
    let opts = RouteOptions {
        path: Some("/admin/v1/".into()),
        ..api_opts()
    };
    let files = plan("users", &opts, Framework::Next);
    assert_eq!(files.main, Path::new("src/app/api/admin/v1/users/route.ts"));
    assert_eq!(files.url, "/api/admin/v1/users");
}

#[test]
fn plan_next_page() {
    let files = plan("about", &RouteOptions::default(), Framework::Next);
    assert_eq!(files.main, Path::new("src/app/about/page.tsx"));
    assert_eq!(files.stylesheet.as_deref(), Some(Path::new("src/app/about/about.module.css")));
    assert_eq!(files.url, "/about");
}

#[test]
fn plan_express_api_javascript() {
    let opts = RouteOptions {
        language: Language::JavaScript,
        ..api_opts()
    };
    let files = plan("orders", &opts, Framework::Node);
    assert_eq!(files.main, Path::new("src/routes/orders.js"));
}

#[test]
fn plan_react_page_nested() {
    let opts = RouteOptions {
        path: Some("account".into()),
        ..Default::default()
    };
    let files = plan("profile", &opts, Framework::React);
    assert_eq!(files.main, Path::new("src/pages/account/profile.tsx"));
    assert_eq!(
        files.stylesheet.as_deref(),
        Some(Path::new("src/pages/account/profile.module.css"))
    );
    assert_eq!(files.url, "/account/profile");
}

// ── method ──────────────────────────────────────────────────────────

#[test]
fn method_is_parsed_for_api_routes() {
    assert_eq!(resolve_method(true, "patch").unwrap(), HttpMethod::Patch);
    let err = resolve_method(true, "FOO").unwrap_err();
    assert!(matches!(err, InitraError::InvalidOption(_)));
}

#[test]
fn method_is_ignored_for_page_routes() {
    assert_eq!(resolve_method(false, "FOO").unwrap(), HttpMethod::Get);
    assert_eq!(resolve_method(false, "POST").unwrap(), HttpMethod::Get);
}

// ── generation ──────────────────────────────────────────────────────

#[test]
#[serial]
fn route_next_api_detected_from_package_json() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());
    write_package_json(r#""next": "14.0.0", "react": "18.2.0""#);

    let opts = RouteOptions {
        method: HttpMethod::Delete,
        ..api_opts()
    };
    let files = route::run("users", &opts).unwrap();
    let content = fs::read_to_string(&files.main).unwrap();
    assert!(content.contains("export async function DELETE(request: NextRequest)"));
    assert!(content.contains("users deleted successfully"));
}

#[test]
#[serial]
fn route_express_api() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());
    write_package_json(r#""express": "4.18.2""#);

    let opts = RouteOptions {
        method: HttpMethod::Put,
        ..api_opts()
    };
    let files = route::run("orders", &opts).unwrap();
    assert_eq!(files.main, Path::new("src/routes/orders.ts"));
    let content = fs::read_to_string(&files.main).unwrap();
    assert!(content.contains("export const putOrders = (req: Request, res: Response) => {"));
}

#[test]
#[serial]
fn route_page_without_package_json_defaults_to_react() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let files = route::run("contact", &RouteOptions::default()).unwrap();
    assert_eq!(files.main, Path::new("src/pages/contact.tsx"));
    assert!(Path::new("src/pages/contact.module.css").exists());
    let content = fs::read_to_string(&files.main).unwrap();
    assert!(content.contains("import styles from './contact.module.css';"));
}

#[test]
#[serial]
fn route_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    route::run("contact", &RouteOptions::default()).unwrap();
    let err = route::run("contact", &RouteOptions::default()).unwrap_err();
    assert!(matches!(err, InitraError::AlreadyExists(_)));
}

#[test]
#[serial]
fn route_existing_stylesheet_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    fs::create_dir_all("src/pages").unwrap();
    fs::write("src/pages/about.module.css", ".custom {}").unwrap();

    let err = route::run("about", &RouteOptions::default()).unwrap_err();
    assert!(matches!(err, InitraError::AlreadyExists(ref p) if p.ends_with("about.module.css")));
    assert!(!Path::new("src/pages/about.tsx").exists());
    let kept = fs::read_to_string("src/pages/about.module.css").unwrap();
    assert_eq!(kept, ".custom {}");
}
