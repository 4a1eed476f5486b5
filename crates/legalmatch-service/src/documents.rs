//! Document drafting: template instantiation, persisted CRUD, section edits
//! and generated suggestions.
//!
//! Documents live as a single JSON array under [`DOCUMENTS_KEY`]. A document
//! moves from *templated* (fresh from the catalog) to *edited* (one or more
//! sections rewritten and saved) and, if deleted, leaves the store.

use chrono::Utc;
use legalmatch_core::{
  Result,
  case::ClientCase,
  catalog,
  document::{DocumentType, LegalDocument},
  generate::{ContentGenerator, GenerationRequest},
  id::generate_id,
  store::KeyValueStore,
};

use crate::persistence::{DOCUMENTS_KEY, Persistence};

pub struct DocumentService<S, G> {
  persistence: Persistence<S>,
  generator:   G,
}

impl<S: KeyValueStore, G: ContentGenerator> DocumentService<S, G> {
  pub fn new(persistence: Persistence<S>, generator: G) -> Self {
    Self { persistence, generator }
  }

  async fn load_all(&self) -> Vec<LegalDocument> {
    self.persistence.retrieve(DOCUMENTS_KEY, Vec::new()).await
  }

  // ── Templates ─────────────────────────────────────────────────────────

  /// A fresh, unsaved document for `case_id`.
  pub fn get_template(&self, document_type: DocumentType, case_id: &str) -> LegalDocument {
    catalog::template_for(document_type, case_id)
  }

  /// The persisted document of `document_type` for `case_id`, or a newly
  /// instantiated and saved template if there is none yet.
  pub async fn open_document(&self, case_id: &str, document_type: DocumentType) -> LegalDocument {
    let existing = self
      .get_documents_for_case(case_id)
      .await
      .into_iter()
      .find(|d| d.document_type == document_type);

    match existing {
      Some(doc) => doc,
      None => {
        tracing::debug!(case_id, %document_type, "instantiating template");
        self.save_document(self.get_template(document_type, case_id)).await
      }
    }
  }

  // ── Persistence ───────────────────────────────────────────────────────

  /// Insert or replace `document` by id and return it as stored.
  ///
  /// A replacement keeps the stored `created_at`. A new document gets an id
  /// if it has none. `updated_at` is always set to now.
  pub async fn save_document(&self, mut document: LegalDocument) -> LegalDocument {
    let mut documents = self.load_all().await;
    let now = Utc::now();

    let existing = if document.id.is_empty() {
      document.id = format!("doc-{}", generate_id());
      None
    } else {
      documents.iter().position(|d| d.id == document.id)
    };

    if let Some(index) = existing {
      document.created_at = documents[index].created_at;
    }
    document.updated_at = now.max(document.created_at);

    match existing {
      Some(index) => documents[index] = document.clone(),
      None => documents.push(document.clone()),
    }

    self.persistence.store(DOCUMENTS_KEY, &documents).await;
    tracing::debug!(document_id = %document.id, replaced = existing.is_some(), "saved document");
    document
  }

  pub async fn get_document(&self, id: &str) -> Option<LegalDocument> {
    self.load_all().await.into_iter().find(|d| d.id == id)
  }

  /// Every document for `case_id`, in the order they were first saved.
  pub async fn get_documents_for_case(&self, case_id: &str) -> Vec<LegalDocument> {
    let mut documents = self.load_all().await;
    documents.retain(|d| d.case_id == case_id);
    documents
  }

  /// Remove every document with `id`. Returns whether anything was removed;
  /// the store is not rewritten otherwise.
  pub async fn delete_document(&self, id: &str) -> bool {
    let mut documents = self.load_all().await;
    let before = documents.len();
    documents.retain(|d| d.id != id);

    if documents.len() == before {
      return false;
    }
    self.persistence.store(DOCUMENTS_KEY, &documents).await;
    tracing::debug!(document_id = id, "deleted document");
    true
  }

  // ── Editing ───────────────────────────────────────────────────────────

  /// Replace the content of section `index` and persist the result.
  pub async fn try_update_section(
    &self,
    document: &LegalDocument,
    index: usize,
    content: impl Into<String>,
  ) -> Result<LegalDocument> {
    let updated = document.with_section_content(index, content, Utc::now())?;
    Ok(self.save_document(updated).await)
  }

  /// Like [`try_update_section`](Self::try_update_section), but an
  /// out-of-range `index` returns `document` unchanged and unsaved.
  pub async fn update_section(
    &self,
    document: &LegalDocument,
    index: usize,
    content: impl Into<String>,
  ) -> LegalDocument {
    match self.try_update_section(document, index, content).await {
      Ok(updated) => updated,
      Err(e) => {
        tracing::warn!(document_id = %document.id, error = %e, "section update ignored");
        document.clone()
      }
    }
  }

  // ── Generation ────────────────────────────────────────────────────────

  /// Ask the generator for content. Failure is reported, never retried.
  pub async fn generate_section_content(
    &self,
    section_title: &str,
    case_context: &str,
    existing_content: Option<&str>,
  ) -> Result<String> {
    let request =
      GenerationRequest::new(section_title, case_context, existing_content.map(str::to_owned));
    self.generator.generate(&request).await
  }

  /// Suggest content for section `index` of `document`, using the section's
  /// title and current content and the case's context. Nothing is saved.
  pub async fn suggest_section(
    &self,
    case: &ClientCase,
    document: &LegalDocument,
    index: usize,
  ) -> Result<String> {
    let section = document.sections.get(index).ok_or(
      legalmatch_core::Error::SectionOutOfBounds { index, len: document.sections.len() },
    )?;
    self
      .generate_section_content(
        &section.title,
        &case.generation_context(),
        Some(section.content.as_str()),
      )
      .await
  }
}
