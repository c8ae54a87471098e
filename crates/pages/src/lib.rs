//! `folio-pages` — server-side page rendering.
//!
//! Templates compile in via askama; each page is a plain function returning
//! rendered HTML. No HTTP types here, so the web layer decides status codes
//! and headers.

use askama::Template;

/// Rendering failure (template runtime error).
pub type RenderError = askama::Error;

/// An entry on the projects page.
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

/// The static project list shown on `/projects`.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "folio",
        description: "This site: server-rendered pages with embedded assets.",
        link: "/",
    },
    Project {
        name: "tideline",
        description: "A tiny tide-table renderer for coastal towns.",
        link: "https://example.com/tideline",
    },
    Project {
        name: "inkwell",
        description: "Markdown notes with backlinks, rendered to static HTML.",
        link: "https://example.com/inkwell",
    },
];

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate;

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate;

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate {
    projects: &'static [Project],
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate;

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate;

#[derive(Template)]
#[template(path = "change_password.html")]
struct ChangePasswordTemplate;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    code: u16,
    title: &'static str,
    message: &'static str,
}

pub fn landing() -> Result<String, RenderError> {
    LandingTemplate.render()
}

pub fn about() -> Result<String, RenderError> {
    AboutTemplate.render()
}

pub fn projects() -> Result<String, RenderError> {
    ProjectsTemplate { projects: PROJECTS }.render()
}

pub fn login_page() -> Result<String, RenderError> {
    LoginTemplate.render()
}

pub fn register_page() -> Result<String, RenderError> {
    RegisterTemplate.render()
}

pub fn change_password_page() -> Result<String, RenderError> {
    ChangePasswordTemplate.render()
}

pub fn error_404() -> Result<String, RenderError> {
    error_page(404, "Not found", "That page does not exist.")
}

pub fn error_500() -> Result<String, RenderError> {
    error_page(500, "Server error", "Something went wrong on our side.")
}

pub fn error_403() -> Result<String, RenderError> {
    error_page(403, "Forbidden", "You are not allowed to see this page.")
}

pub fn error_401() -> Result<String, RenderError> {
    error_page(401, "Unauthorized", "You need to log in first.")
}

fn error_page(code: u16, title: &'static str, message: &'static str) -> Result<String, RenderError> {
    ErrorTemplate { code, title, message }.render()
}
