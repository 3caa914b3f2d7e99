//! Google Cloud Platform command builders.
//!
//! Nothing here talks to GCP. The modules only describe what the generated
//! `gcloud` invocations look like.

pub mod gce;
