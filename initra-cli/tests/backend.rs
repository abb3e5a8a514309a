use initra_cli::commands::backend::{self, file_path, BackendKind, MiddlewareKind};
use initra_cli::commands::naming::NameVariants;
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

#[test]
fn file_path_per_kind() {
    let name = NameVariants::new("BlogPost");
    let ts = Language::TypeScript;
    assert_eq!(
        file_path(BackendKind::Controller, &name, ts),
        Path::new("src/controllers/blog-post.controller.ts")
    );
    assert_eq!(
        file_path(BackendKind::Service, &name, ts),
        Path::new("src/services/blog-post.service.ts")
    );
    assert_eq!(
        file_path(BackendKind::Model, &name, ts),
        Path::new("src/models/blog-post.model.ts")
    );
    assert_eq!(file_path(BackendKind::Dto, &name, ts), Path::new("src/dto/blog-post.dto.ts"));
    assert_eq!(
        file_path(BackendKind::Route, &name, Language::JavaScript),
        Path::new("src/routes/blog-post.route.js")
    );
    assert_eq!(
        file_path(BackendKind::Middleware, &name, ts),
        Path::new("src/middleware/blog-post.middleware.ts")
    );
}

#[test]
#[serial]
fn controller_generated() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let created = backend::generate(
        BackendKind::Controller,
        "product",
        Language::TypeScript,
        MiddlewareKind::Default,
    )
    .unwrap();
    assert!(created);

    let content = fs::read_to_string("src/controllers/product.controller.ts").unwrap();
    assert!(content.contains("import * as productService from '../services/product.service';"));
    assert!(content.contains("export const createProduct = async"));
    assert!(!content.contains("{{"));
}

#[test]
#[serial]
fn model_and_dto_javascript() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    backend::generate(BackendKind::Model, "product", Language::JavaScript, MiddlewareKind::Default)
        .unwrap();
    backend::generate(BackendKind::Dto, "product", Language::JavaScript, MiddlewareKind::Default)
        .unwrap();

    let model = fs::read_to_string("src/models/product.model.js").unwrap();
    assert!(model.contains("import mongoose from 'mongoose';"));
    let dto = fs::read_to_string("src/dto/product.dto.js").unwrap();
    assert!(dto.contains("import Joi from 'joi';"));
}

#[test]
#[serial]
fn jwt_middleware_generated() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    backend::generate(BackendKind::Middleware, "auth", Language::TypeScript, MiddlewareKind::Jwt)
        .unwrap();
    let content = fs::read_to_string("src/middleware/auth.middleware.ts").unwrap();
    assert!(content.contains("jsonwebtoken"));
    assert!(content.contains("export default authMiddleware;"));
}

#[test]
#[serial]
fn jwt_rejected_for_other_kinds() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let err = backend::generate(BackendKind::Controller, "auth", Language::TypeScript, MiddlewareKind::Jwt)
        .unwrap_err();
    assert!(matches!(err, InitraError::InvalidOption(_)));
    assert!(!Path::new("src").exists());
}

#[test]
#[serial]
fn existing_file_is_skipped_not_overwritten() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());
    fs::create_dir_all("src/models").unwrap();
    fs::write("src/models/product.model.ts", "// mine").unwrap();

    let created =
        backend::generate(BackendKind::Model, "product", Language::TypeScript, MiddlewareKind::Default)
            .unwrap();
    assert!(!created);
    assert_eq!(fs::read_to_string("src/models/product.model.ts").unwrap(), "// mine");
}

#[test]
#[serial]
fn backend_invalid_name() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let err = backend::generate(BackendKind::Model, "class", Language::TypeScript, MiddlewareKind::Default)
        .unwrap_err();
    assert!(err.to_string().contains("reserved word"));
}

// ── api ─────────────────────────────────────────────────────────────

#[test]
#[serial]
fn api_generates_all_five_files() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());

    let created = backend::api("blog-post", Language::TypeScript).unwrap();
    assert_eq!(created, 5);
    for path in [
        "src/controllers/blog-post.controller.ts",
        "src/services/blog-post.service.ts",
        "src/models/blog-post.model.ts",
        "src/dto/blog-post.dto.ts",
        "src/routes/blog-post.route.ts",
    ] {
        assert!(Path::new(path).exists(), "{path} missing");
    }
    assert!(!Path::new("src/middleware").exists());

    let route = fs::read_to_string("src/routes/blog-post.route.ts").unwrap();
    assert!(route.contains("from '../controllers/blog-post.controller';"));
}

#[test]
#[serial]
fn api_skips_existing_and_continues() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::new(tmp.path());
    fs::create_dir_all("src/services").unwrap();
    fs::write("src/services/user.service.js", "// mine").unwrap();

    let created = backend::api("user", Language::JavaScript).unwrap();
    assert_eq!(created, 4);
    assert_eq!(fs::read_to_string("src/services/user.service.js").unwrap(), "// mine");
    assert!(Path::new("src/routes/user.route.js").exists());
}
