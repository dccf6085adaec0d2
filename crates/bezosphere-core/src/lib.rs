//! Core of the bezosphere gateway: a credential-brokering, caching RPC gateway in front of a
//! family of read-only cloud-describe APIs.
//!
//! The pipeline (see [`pipeline::Pipeline`]) is generic over its three collaborating
//! backends — [`store::Store`], [`broker::CredentialBroker`], [`dispatch::Dispatcher`] — so
//! production code wires [`store::PostgresStore`] / a tonic credential-broker client /
//! [`dispatch::aws::AwsDispatcher`], while tests wire the `mock` feature's in-memory
//! equivalents.
//!
//! ```no_run
//! use bezosphere_core::broker::MockCredentialBroker;
//! use bezosphere_core::dispatch::MockDispatcher;
//! use bezosphere_core::pipeline::Pipeline;
//! use bezosphere_core::store::MockStore;
//!
//! # async fn quickstart() {
//! let pipeline = Pipeline::new(
//!     MockStore::new(),
//!     MockCredentialBroker::succeeding(),
//!     MockDispatcher::new(),
//! );
//! # let _ = pipeline;
//! # }
//! ```

pub mod broker;
pub mod config;
pub mod dispatch;
pub mod fingerprint;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod store;

pub use broker::{BrokerError, CredentialBroker};
pub use config::{Config, ConfigError};
pub use dispatch::{DispatchError, Dispatcher};
pub use fingerprint::{fingerprint, FingerprintError};
pub use model::{
    CloudCredentials, CloudSession, Request, RequestInput, Response, ResponseOutput, User,
};
pub use pipeline::{Pipeline, PipelineError};
pub use registry::{cacheable, response_tag, RegistryError};
pub use store::{Resource, Store, StoreError};
