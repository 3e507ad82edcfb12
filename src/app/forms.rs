//! Form stores: one per form, plus the résumé file browser.
//!
//! Stores only hold what the user typed. Turning that into a request goes
//! through the `validate` functions, which are pure and never touch the
//! network.

use crate::api::{Candidature, LoginCredentials, Position, Registration};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please attach your résumé.")]
    MissingResume,
}

/// Single editable text value with a byte cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
    pub masked: bool,
    pub multiline: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let bytes = self.text.as_bytes();
        let mut pos = self.cursor;
        while pos > 0 && bytes[pos - 1].is_ascii_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !bytes[pos - 1].is_ascii_whitespace() {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Delete from the start of the current line to the cursor.
    pub fn delete_to_line_start(&mut self) {
        let start = self.text[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Zero-based (line, text before the cursor on that line).
    pub fn cursor_line(&self) -> (usize, &str) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, &before[start..])
    }

    /// Text as it is drawn: masked fields show one bullet per character.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.text.chars().count())
        } else {
            self.text.clone()
        }
    }
}

fn required(value: &str, name: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(name))
    } else {
        Ok(trimmed.to_string())
    }
}

fn valid_email(value: &str) -> Result<String, ValidationError> {
    let email = required(value, "Email")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Passwords are checked for presence only; whitespace is significant.
fn required_secret(value: &str, name: &'static str) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(name))
    } else {
        Ok(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Email => LoginField::Submit,
            LoginField::Password => LoginField::Email,
            LoginField::Submit => LoginField::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::Email,
        }
    }
}

impl LoginForm {
    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::Submit => None,
        }
    }

    pub fn credentials(&self) -> Result<LoginCredentials, ValidationError> {
        Ok(LoginCredentials {
            email: valid_email(self.email.value())?,
            password: required_secret(self.password.value(), "Password")?,
        })
    }
}

/// Raw registration input, confirmation included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationData {
    /// Required fields first, then the confirmation check.
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        let name = required(&self.name, "Full name")?;
        let email = valid_email(&self.email)?;
        let password = required_secret(&self.password, "Password")?;
        required_secret(&self.confirm_password, "Password confirmation")?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(Registration {
            name,
            email,
            password,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Submit,
}

impl RegisterField {
    const ORDER: [RegisterField; 5] = [
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
        RegisterField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub focus: RegisterField,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: TextField::new(),
            email: TextField::new(),
            password: TextField::masked(),
            confirm_password: TextField::masked(),
            focus: RegisterField::Name,
        }
    }
}

impl RegisterForm {
    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            RegisterField::Name => Some(&mut self.name),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::ConfirmPassword => Some(&mut self.confirm_password),
            RegisterField::Submit => None,
        }
    }

    pub fn data(&self) -> RegistrationData {
        RegistrationData {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            confirm_password: self.confirm_password.value().to_string(),
        }
    }
}

/// Login and registration views, with login shown first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    pub view: AuthView,
    pub login: LoginForm,
    pub register: RegisterForm,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            view: AuthView::Login,
            login: LoginForm::default(),
            register: RegisterForm::default(),
        }
    }
}

impl AuthForm {
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            AuthView::Login => AuthView::Register,
            AuthView::Register => AuthView::Login,
        };
    }
}

/// A résumé picked in the file browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl ResumeFile {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, file_name }
    }
}

/// Raw application input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub phone: String,
    pub position: Position,
    pub motivation_text: String,
    pub resume: Option<ResumeFile>,
}

impl ApplicationSubmission {
    pub fn validate(&self) -> Result<Candidature, ValidationError> {
        let phone = required(&self.phone, "Phone number")?;
        required(&self.motivation_text, "Cover letter")?;
        let resume = self
            .resume
            .as_ref()
            .ok_or(ValidationError::MissingResume)?;
        Ok(Candidature {
            phone,
            position: self.position,
            motivation_text: self.motivation_text.clone(),
            resume: resume.path.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    Phone,
    Position,
    Motivation,
    Resume,
    Submit,
}

impl ApplicationField {
    const ORDER: [ApplicationField; 5] = [
        ApplicationField::Phone,
        ApplicationField::Position,
        ApplicationField::Motivation,
        ApplicationField::Resume,
        ApplicationField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    pub phone: TextField,
    pub position: Position,
    pub motivation: TextField,
    pub resume: Option<ResumeFile>,
    pub focus: ApplicationField,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            phone: TextField::new(),
            position: Position::default(),
            motivation: TextField::multiline(),
            resume: None,
            focus: ApplicationField::Phone,
        }
    }
}

impl ApplicationForm {
    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            ApplicationField::Phone => Some(&mut self.phone),
            ApplicationField::Motivation => Some(&mut self.motivation),
            _ => None,
        }
    }

    pub fn submission(&self) -> ApplicationSubmission {
        ApplicationSubmission {
            phone: self.phone.value().to_string(),
            position: self.position,
            motivation_text: self.motivation.value().to_string(),
            resume: self.resume.clone(),
        }
    }

    /// Back to the initial empty state, position included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Popup directory listing used to pick the résumé.
///
/// Only directories and files whose extension is on the allow-list are
/// listed. The allow-list is a picker filter, nothing downstream re-checks it.
#[derive(Debug)]
pub struct FileBrowser {
    pub visible: bool,
    pub dir: PathBuf,
    pub entries: Vec<BrowserEntry>,
    pub selected: usize,
    pub scroll_offset: usize,
    extensions: Vec<String>,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf, extensions: &[String]) -> Self {
        Self {
            visible: false,
            dir: start_dir,
            entries: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn is_allowed(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == e)
            })
            .unwrap_or(false)
    }

    /// Show the popup on the last visited directory.
    pub fn open(&mut self) -> io::Result<()> {
        let dir = self.dir.clone();
        self.read_dir(&dir)?;
        self.visible = true;
        Ok(())
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Replace the listing with the contents of `dir`.
    pub fn read_dir(&mut self, dir: &Path) -> io::Result<()> {
        let mut entries = Vec::new();
        if let Some(parent) = dir.parent() {
            entries.push(BrowserEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            });
        }

        for entry in std::fs::read_dir(dir)? {
            let Ok(entry) = entry else { continue };
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            // Follows symlinks, so a link to a directory is listed as one.
            let is_dir = path.is_dir();
            if is_dir {
                entries.push(BrowserEntry {
                    name,
                    path,
                    kind: EntryKind::Directory,
                });
            } else if self.is_allowed(&path) {
                entries.push(BrowserEntry {
                    name,
                    path,
                    kind: EntryKind::File,
                });
            }
        }

        entries.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        self.dir = dir.to_path_buf();
        self.entries = entries;
        self.selected = 0;
        self.scroll_offset = 0;
        Ok(())
    }

    pub fn selected_entry(&self) -> Option<&BrowserEntry> {
        self.entries.get(self.selected)
    }

    /// Enter on the selected row: descend into directories, pick files.
    pub fn activate(&mut self) -> io::Result<Option<ResumeFile>> {
        let Some(entry) = self.selected_entry().cloned() else {
            return Ok(None);
        };
        match entry.kind {
            EntryKind::Parent | EntryKind::Directory => {
                self.read_dir(&entry.path)?;
                Ok(None)
            }
            EntryKind::File => {
                self.visible = false;
                Ok(Some(ResumeFile::from_path(entry.path)))
            }
        }
    }

    pub fn go_up(&mut self) -> io::Result<()> {
        match self.dir.parent().map(Path::to_path_buf) {
            Some(parent) => self.read_dir(&parent),
            None => Ok(()),
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn move_end(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    /// Keep the selection inside a window of `height` rows.
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn text_field_edits_utf8() {
        let mut f = TextField::new();
        for c in "café".chars() {
            f.insert_char(c);
        }
        f.move_left();
        f.delete_back();
        assert_eq!(f.value(), "caé");
        f.move_end();
        f.delete_back();
        assert_eq!(f.value(), "ca");
        f.move_home();
        f.delete_forward();
        assert_eq!(f.value(), "a");
    }

    #[test]
    fn single_line_field_rejects_newline() {
        let mut f = TextField::new();
        f.insert_newline();
        assert_eq!(f.value(), "");

        let mut m = TextField::multiline();
        m.set("Dear team");
        m.insert_newline();
        m.insert_char('x');
        assert_eq!(m.value(), "Dear team\nx");
        assert_eq!(m.cursor_line(), (1, "x"));
        m.move_home();
        assert_eq!(m.cursor_line(), (1, ""));
    }

    #[test]
    fn delete_word_back_stops_at_whitespace() {
        let mut f = TextField::new();
        f.set("hello big world  ");
        f.delete_word_back();
        assert_eq!(f.value(), "hello big ");
        f.delete_to_line_start();
        assert_eq!(f.value(), "");
    }

    #[test]
    fn masked_display_hides_text() {
        let mut f = TextField::masked();
        f.set("sécret");
        assert_eq!(f.display(), "••••••");
    }

    #[test]
    fn login_requires_fields_and_email_shape() {
        let mut form = LoginForm::default();
        assert_eq!(form.credentials(), Err(ValidationError::Required("Email")));
        form.email.set("not-an-email");
        assert_eq!(form.credentials(), Err(ValidationError::InvalidEmail));
        form.email.set(" a@b.com ");
        assert_eq!(form.credentials(), Err(ValidationError::Required("Password")));
        form.password.set("x");
        assert_eq!(
            form.credentials(),
            Ok(LoginCredentials {
                email: "a@b.com".into(),
                password: "x".into()
            })
        );
    }

    #[test]
    fn registration_rejects_mismatched_passwords() {
        let data = RegistrationData {
            name: "Amine".into(),
            email: "a@b.com".into(),
            password: "one".into(),
            confirm_password: "two".into(),
        };
        assert_eq!(data.validate(), Err(ValidationError::PasswordMismatch));
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn registration_drops_confirmation() {
        let data = RegistrationData {
            name: " Amine ".into(),
            email: "a@b.com".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        };
        assert_eq!(
            data.validate(),
            Ok(Registration {
                name: "Amine".into(),
                email: "a@b.com".into(),
                password: "pw".into()
            })
        );
    }

    #[test]
    fn application_requires_resume() {
        let mut form = ApplicationForm::default();
        form.phone.set("0555");
        form.motivation.set("Motivated");
        assert_eq!(
            form.submission().validate(),
            Err(ValidationError::MissingResume)
        );

        form.resume = Some(ResumeFile::from_path(PathBuf::from("/tmp/cv.pdf")));
        form.position = Position::Secretary;
        let candidature = form.submission().validate().unwrap();
        assert_eq!(candidature.position, Position::Secretary);
        assert_eq!(candidature.resume, PathBuf::from("/tmp/cv.pdf"));
    }

    #[test]
    fn cover_letter_is_sent_as_typed() {
        let mut form = ApplicationForm::default();
        form.phone.set("0555");
        form.resume = Some(ResumeFile::from_path(PathBuf::from("/tmp/cv.pdf")));

        form.motivation.set(" \n  ");
        assert_eq!(
            form.submission().validate(),
            Err(ValidationError::Required("Cover letter"))
        );

        form.motivation.set("  Dear team,\n\n  I apply.\n\n");
        let candidature = form.submission().validate().unwrap();
        assert_eq!(candidature.motivation_text, "  Dear team,\n\n  I apply.\n\n");
    }

    #[test]
    fn application_reset_restores_defaults() {
        let mut form = ApplicationForm::default();
        form.phone.set("0555");
        form.position = Position::Secretary;
        form.motivation.set("text");
        form.resume = Some(ResumeFile::from_path(PathBuf::from("cv.docx")));
        form.focus = ApplicationField::Submit;
        form.reset();
        assert_eq!(form, ApplicationForm::default());
        assert_eq!(form.position, Position::SalesAgentReceptionist);
    }

    #[test]
    fn field_focus_wraps() {
        assert_eq!(LoginField::Submit.next(), LoginField::Email);
        assert_eq!(RegisterField::Name.prev(), RegisterField::Submit);
        assert_eq!(ApplicationField::Resume.next(), ApplicationField::Submit);
    }

    fn exts() -> Vec<String> {
        vec!["pdf".into(), ".DOC".into(), "docx".into()]
    }

    #[test]
    fn browser_lists_dirs_then_allowed_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("letters")).unwrap();
        fs::create_dir(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join("cv.PDF"), b"x").unwrap();
        fs::write(dir.path().join("a.doc"), b"x").unwrap();
        fs::write(dir.path().join("photo.png"), b"x").unwrap();
        fs::write(dir.path().join(".hidden.pdf"), b"x").unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf(), &exts());
        browser.open().unwrap();
        assert!(browser.visible);

        let names: Vec<_> = browser.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "letters", "a.doc", "cv.PDF"]);
    }

    #[test]
    fn browser_descends_and_picks() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("docs");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("resume.docx"), b"x").unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf(), &exts());
        browser.open().unwrap();
        browser.move_down(); // past ".."
        assert_eq!(browser.selected_entry().unwrap().name, "docs");
        assert_eq!(browser.activate().unwrap(), None);
        assert_eq!(browser.dir, sub);

        browser.move_end();
        let picked = browser.activate().unwrap().unwrap();
        assert_eq!(picked.file_name, "resume.docx");
        assert_eq!(picked.path, sub.join("resume.docx"));
        assert!(!browser.visible);

        browser.go_up().unwrap();
        assert_eq!(browser.dir, dir.path());
    }

    #[test]
    fn browser_scroll_follows_selection() {
        let mut browser = FileBrowser::new(PathBuf::from("/"), &exts());
        browser.entries = (0..30)
            .map(|i| BrowserEntry {
                name: format!("{i}.pdf"),
                path: PathBuf::from(format!("/{i}.pdf")),
                kind: EntryKind::File,
            })
            .collect();
        for _ in 0..12 {
            browser.move_down();
        }
        browser.ensure_visible(10);
        assert_eq!(browser.scroll_offset, 3);
        browser.move_home();
        browser.ensure_visible(10);
        assert_eq!(browser.scroll_offset, 0);
    }
}
