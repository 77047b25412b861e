//! IRIS1 Request Builder
//!
//! Renders the `lookupEntity` search document sent to a DAS server
//! (RFC 3981 envelope, `dchk1` registry type from RFC 5778).

/// XML namespace of the IRIS1 core envelope.
pub const IRIS1_NAMESPACE: &str = "urn:ietf:params:xml:ns:iris1";

/// Registry type answering domain availability checks.
pub const REGISTRY_TYPE: &str = "dchk1";

pub const ENTITY_CLASS: &str = "domain-name";

/// Builds IRIS1 domain lookup requests
pub struct RequestBuilder;

impl RequestBuilder {
    /// Build the request document for `domain`.
    ///
    /// Surrounding whitespace is trimmed. The name is embedded verbatim in
    /// the `entityName` attribute; XML metacharacters are not escaped, so a
    /// name containing `"`, `<` or `&` produces a broken document.
    pub fn build(domain: &str) -> String {
        let domain = domain.trim();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<iris1:request xmlns:iris1="{IRIS1_NAMESPACE}">
  <iris1:searchSet>
    <iris1:lookupEntity registryType="{REGISTRY_TYPE}" entityClass="{ENTITY_CLASS}" entityName="{domain}"/>
  </iris1:searchSet>
</iris1:request>"#
        )
    }
}
