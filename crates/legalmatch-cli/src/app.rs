//! Command handlers. Each handler writes its user-facing output to the
//! supplied writer and returns an error for anything the user must fix.

use std::{
  io::Write,
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::{Context, Result, anyhow, bail};
use legalmatch_core::{
  Error,
  case::{ClientCase, NewCase},
  document::DocumentType,
  identity::Identity,
  matching,
  reference::ReferenceData,
  store::KeyValueStore,
};
use legalmatch_service::{CaseRepository, DocumentService, MockGenerator, Persistence, Session};
use legalmatch_store_sqlite::SqliteStore;

use crate::{config::CliConfig, display};

/// Services wired to one store and one set of reference data.
pub struct App<S> {
  pub cases:     CaseRepository<S>,
  pub documents: DocumentService<S, MockGenerator>,
  pub session:   Session<S>,
}

impl App<SqliteStore> {
  /// Open the configured store and restore any saved session.
  pub async fn open(config: &CliConfig) -> Result<Self> {
    let reference = match config.reference_data_path() {
      Some(path) => load_reference(&path)?,
      None => ReferenceData::builtin(),
    };

    let store_path = config.store_path();
    let store = SqliteStore::open(&store_path)
      .await
      .with_context(|| format!("failed to open store at {store_path:?}"))?;

    Ok(Self::new(Arc::new(store), reference, MockGenerator::new(config.generation_latency())).await)
  }
}

fn load_reference(path: &Path) -> Result<ReferenceData> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading reference data {}", path.display()))?;
  ReferenceData::from_json(&raw).context("parsing reference data")
}

impl<S: KeyValueStore> App<S> {
  pub async fn new(store: Arc<S>, reference: ReferenceData, generator: MockGenerator) -> Self {
    let persistence = Persistence::new(store);
    let reference = Arc::new(reference);
    Self {
      cases:     CaseRepository::new(Arc::clone(&reference), persistence.clone()),
      documents: DocumentService::new(persistence.clone(), generator),
      session:   Session::init(persistence, reference).await,
    }
  }

  fn require_user(&self) -> Result<&Identity> {
    self
      .session
      .require()
      .map_err(|e| anyhow!("{e}; run `legalmatch login <email>` first"))
  }

  fn require_case(&self, case_id: &str) -> Result<&ClientCase> {
    self.require_user()?;
    self
      .cases
      .find_case_by_id(case_id)
      .ok_or_else(|| Error::CaseNotFound(case_id.to_owned()).into())
  }

  // ── Clients ───────────────────────────────────────────────────────────

  pub async fn submit(&self, out: &mut impl Write, input: NewCase) -> Result<()> {
    let case = self.cases.submit_case(input).await?;
    writeln!(out, "Case submitted ({}). A matched lawyer may contact you soon.", case.id)?;
    Ok(())
  }

  pub async fn submitted(&self, out: &mut impl Write) -> Result<()> {
    let cases = self.cases.submitted_cases().await;
    if cases.is_empty() {
      writeln!(out, "No submitted cases.")?;
    }
    for case in &cases {
      writeln!(out, "{}", display::case_line(case, None))?;
    }
    Ok(())
  }

  // ── Session ───────────────────────────────────────────────────────────

  pub async fn login(&mut self, out: &mut impl Write, email: &str, password: &str) -> Result<()> {
    if !self.session.login(email, password).await {
      bail!("login failed: invalid email or password");
    }
    let greeting = match self.session.current() {
      Some(user) if user.role == legalmatch_core::identity::Role::Lawyer => ", counselor",
      _ => "",
    };
    writeln!(out, "Welcome back{greeting}!")?;
    Ok(())
  }

  pub async fn logout(&mut self, out: &mut impl Write) -> Result<()> {
    self.session.logout().await;
    writeln!(out, "You have been logged out.")?;
    Ok(())
  }

  pub fn whoami(&self, out: &mut impl Write) -> Result<()> {
    match self.session.current() {
      Some(user) => {
        let lawyer = self.cases.find_lawyer_by_id(&user.id);
        writeln!(out, "{}", display::identity_line(user, lawyer))?;
      }
      None => writeln!(out, "Not logged in.")?,
    }
    Ok(())
  }

  // ── Dashboard ─────────────────────────────────────────────────────────

  pub fn matched_cases(&self, out: &mut impl Write) -> Result<()> {
    let user = self.require_user()?;
    let lawyer = self
      .cases
      .find_lawyer_by_id(&user.id)
      .ok_or_else(|| anyhow!("no lawyer profile for user {}", user.id))?;

    let matched = self.cases.matched_cases_for_lawyer(&lawyer.id);
    if matched.is_empty() {
      writeln!(out, "No matched cases.")?;
    }
    for case in &matched {
      let score = matching::match_score(lawyer, case);
      writeln!(out, "{}", display::case_line(case, Some(score)))?;
    }
    Ok(())
  }

  pub async fn show_case(&self, out: &mut impl Write, case_id: &str) -> Result<()> {
    let case = self.require_case(case_id)?;
    write!(out, "{}", display::case_card(case))?;

    let documents = self.documents.get_documents_for_case(case_id).await;
    if !documents.is_empty() {
      writeln!(out, "\nDocuments:")?;
      for doc in &documents {
        writeln!(out, "  {}", display::document_line(doc))?;
      }
    }
    Ok(())
  }

  // ── Drafting ──────────────────────────────────────────────────────────

  pub async fn documents(&self, out: &mut impl Write, case_id: &str) -> Result<()> {
    self.require_case(case_id)?;
    let documents = self.documents.get_documents_for_case(case_id).await;
    if documents.is_empty() {
      writeln!(out, "No documents for case {case_id}.")?;
    }
    for doc in &documents {
      writeln!(out, "{}", display::document_line(doc))?;
    }
    Ok(())
  }

  pub async fn draft(&self, out: &mut impl Write, case_id: &str, ty: DocumentType) -> Result<()> {
    self.require_case(case_id)?;
    let doc = self.documents.open_document(case_id, ty).await;
    write!(out, "{}", display::document_body(&doc))?;
    Ok(())
  }

  pub async fn edit(
    &self,
    out: &mut impl Write,
    case_id: &str,
    ty: DocumentType,
    section: usize,
    content: String,
  ) -> Result<()> {
    self.require_case(case_id)?;
    let index = section_index(section)?;
    let doc = self.documents.open_document(case_id, ty).await;
    let updated = self.documents.try_update_section(&doc, index, content).await?;
    writeln!(out, "Section {section} ({}) updated.", updated.sections[index].title)?;
    Ok(())
  }

  pub async fn suggest(
    &self,
    out: &mut impl Write,
    case_id: &str,
    ty: DocumentType,
    section: usize,
    apply: bool,
  ) -> Result<()> {
    let case = self.require_case(case_id)?;
    let index = section_index(section)?;
    let doc = self.documents.open_document(case_id, ty).await;

    let suggestion = self
      .documents
      .suggest_section(case, &doc, index)
      .await
      .context("unable to generate content, please try again")?;
    writeln!(out, "{suggestion}")?;

    if apply {
      self.documents.try_update_section(&doc, index, suggestion).await?;
      writeln!(out, "\nSuggestion saved to section {section}.")?;
    }
    Ok(())
  }

  pub async fn export(
    &self,
    out: &mut impl Write,
    case_id: &str,
    ty: DocumentType,
    dir: &Path,
  ) -> Result<PathBuf> {
    self.require_case(case_id)?;
    let doc = self.documents.open_document(case_id, ty).await;
    let path = dir.join(doc.export_file_name(chrono::Utc::now().date_naive()));
    std::fs::write(&path, doc.to_plain_text())
      .with_context(|| format!("writing {}", path.display()))?;
    writeln!(out, "Exported to {}", path.display())?;
    Ok(path)
  }

  pub async fn delete(&self, out: &mut impl Write, document_id: &str) -> Result<()> {
    self.require_user()?;
    if !self.documents.delete_document(document_id).await {
      bail!("document not found: {document_id}");
    }
    writeln!(out, "Deleted {document_id}.")?;
    Ok(())
  }
}

/// Sections are numbered from 1 on the command line.
fn section_index(section: usize) -> Result<usize> {
  section.checked_sub(1).context("sections are numbered from 1")
}
