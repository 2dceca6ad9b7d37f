use chainsmith::error::{Error, Result};
use chainsmith::generator::Generator;
use chainsmith::loader::TemplateLibrary;
use chainsmith::processor::{Context, LocalFileSystem};
use chainsmith::prompt::Prompter;
use serde_json::json;
use std::cell::Cell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Answers every confirmation with a fixed value and counts the questions.
struct FixedPrompter {
    answer: bool,
    asked: Cell<usize>,
}

impl FixedPrompter {
    fn new(answer: bool) -> Self {
        Self { answer, asked: Cell::new(0) }
    }
}

impl Prompter for FixedPrompter {
    fn confirm(&self, skip_prompt: bool, _prompt: String) -> Result<bool> {
        if skip_prompt {
            return Ok(true);
        }
        self.asked.set(self.asked.get() + 1);
        Ok(self.answer)
    }
}

fn write_templates(root: &Path) {
    let files = [
        ("partials/content.j2", "<p>{{ name | camelize }}</p>"),
        ("partials/layout.html.j2", "<main>{{ content }}</main>"),
        ("styling/template.j2", "<style/>{{ content }}"),
        ("controller/template.j2", "class {{ name | camelize }}Controller\nend\n"),
    ];
    for (name, body) in files {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }
}

fn context() -> Context {
    let mut context = Context::new();
    context.insert("name".to_string(), json!("blog_post"));
    context
}

#[test]
fn test_create_from_chain() {
    let templates = TempDir::new().unwrap();
    write_templates(templates.path());
    let output = TempDir::new().unwrap();

    let library = TemplateLibrary::new(templates.path()).unwrap();
    let prompt = FixedPrompter::new(false);
    let generator =
        Generator::new(library.renderer(), &library, &LocalFileSystem, &prompt, false);

    let target = output.path().join("views/{{ name | pluralize }}/index.html._styling._layout._content");
    let created = generator.create(target.to_str().unwrap(), None, &context()).unwrap();

    let dir = output.path().join("views/blog_posts");
    assert_eq!(created, dir.join("index.html"));
    assert_eq!(
        fs::read_to_string(dir.join("index.html._styling._layout")).unwrap(),
        "<p>BlogPost</p>"
    );
    assert_eq!(
        fs::read_to_string(dir.join("index.html._styling")).unwrap(),
        "<main><p>BlogPost</p></main>"
    );
    assert_eq!(
        fs::read_to_string(dir.join("index.html")).unwrap(),
        "<style/><main><p>BlogPost</p></main>"
    );
    assert_eq!(prompt.asked.get(), 0);
}

#[test]
fn test_create_from_single_template() {
    let templates = TempDir::new().unwrap();
    write_templates(templates.path());
    let output = TempDir::new().unwrap();

    let library = TemplateLibrary::new(templates.path()).unwrap();
    let prompt = FixedPrompter::new(false);
    let generator =
        Generator::new(library.renderer(), &library, &LocalFileSystem, &prompt, false);

    let target = output.path().join("app/controllers/blog_posts_controller.rb");
    let created =
        generator.create(target.to_str().unwrap(), Some("controller"), &context()).unwrap();

    assert_eq!(created, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "class BlogPostController\nend\n");
}

#[test]
fn test_create_without_chain_or_template() {
    let templates = TempDir::new().unwrap();
    let library = TemplateLibrary::new(templates.path()).unwrap();
    let prompt = FixedPrompter::new(true);
    let generator =
        Generator::new(library.renderer(), &library, &LocalFileSystem, &prompt, false);

    let result = generator.create("plain.txt", None, &Context::new());
    assert!(matches!(result, Err(Error::TemplateError(_))));
}

#[test]
fn test_declined_overwrite_keeps_existing_file() {
    let templates = TempDir::new().unwrap();
    write_templates(templates.path());
    let output = TempDir::new().unwrap();
    let existing = output.path().join("index.html");
    fs::write(&existing, "keep me").unwrap();

    let library = TemplateLibrary::new(templates.path()).unwrap();
    let prompt = FixedPrompter::new(false);
    let generator =
        Generator::new(library.renderer(), &library, &LocalFileSystem, &prompt, false);

    let target = output.path().join("index.html._layout._content");
    let result = generator.create(target.to_str().unwrap(), None, &context());

    assert!(matches!(result, Err(Error::TargetExistsError { .. })));
    assert_eq!(prompt.asked.get(), 1);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "keep me");
    assert!(!output.path().join("index.html._layout").exists());
}

#[test]
fn test_skip_overwrite_check_replaces_file() {
    let templates = TempDir::new().unwrap();
    write_templates(templates.path());
    let output = TempDir::new().unwrap();
    let existing = output.path().join("index.html");
    fs::write(&existing, "old").unwrap();

    let library = TemplateLibrary::new(templates.path()).unwrap();
    let prompt = FixedPrompter::new(false);
    let generator =
        Generator::new(library.renderer(), &library, &LocalFileSystem, &prompt, true);

    let target = output.path().join("index.html._layout._content");
    generator.create(target.to_str().unwrap(), None, &context()).unwrap();

    assert_eq!(prompt.asked.get(), 0);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "<main><p>BlogPost</p></main>");
}

#[test]
fn test_missing_stage_template_reports_stage() {
    let templates = TempDir::new().unwrap();
    write_templates(templates.path());
    let output = TempDir::new().unwrap();

    let library = TemplateLibrary::new(templates.path()).unwrap();
    let prompt = FixedPrompter::new(true);
    let generator =
        Generator::new(library.renderer(), &library, &LocalFileSystem, &prompt, false);

    let target = output.path().join("index.html._footer._content");
    let err = generator.create(target.to_str().unwrap(), None, &context()).unwrap_err();

    match err {
        Error::ProcessError { stage, template, .. } => {
            assert_eq!(stage, 1);
            assert_eq!(template, "footer");
        }
        other => panic!("Expected ProcessError, got {other:?}"),
    }
    assert!(output.path().join("index.html._footer").exists());
    assert!(!output.path().join("index.html").exists());
}
