pub mod config;
pub mod logging;

pub mod proxy;
pub mod uri;

pub use proxy::{
    is_malformed, pick_proxy, MalformedProxyUri, ProxyDescriptor, ProxyScheme, ProxyUri,
};
