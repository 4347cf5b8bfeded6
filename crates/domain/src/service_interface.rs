use std::borrow::Cow;
use std::fmt;

/// Names one gateway interface: the TXT key of the module that serves it and
/// the path segment appended to the module path.
///
/// An empty `suffix` means the module path itself is the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceInterfaceName {
    module_name: Cow<'static, str>,
    suffix: Cow<'static, str>,
}

impl ServiceInterfaceName {
    pub const I_AUTHENTICATION_INSURANT: Self =
        Self::known("authn", "I_Authentication_Insurant");
    pub const I_AUTHORIZATION_INSURANT: Self = Self::known("authz", "I_Authorization_Insurant");
    pub const I_AUTHORIZATION_MANAGEMENT_INSURANT: Self =
        Self::known("authz", "I_Authorization_Management_Insurant");
    pub const I_ACCOUNT_MANAGEMENT_INSURANT: Self =
        Self::known("docv", "I_Account_Management_Insurant");
    pub const I_DOCUMENT_MANAGEMENT_CONNECT: Self =
        Self::known("docv", "I_Document_Management_Connect");
    pub const I_DOCUMENT_MANAGEMENT_INSURANT: Self =
        Self::known("docv", "I_Document_Management_Insurant");
    pub const I_OCSP_STATUS_INFORMATION: Self =
        Self::known("ocspf", "I_OCSP_Status_Information");
    pub const I_PROXY_DIRECTORY_QUERY: Self = Self::known("avzd", "I_Proxy_Directory_Query");
    pub const I_GET_KEY_SGD_1: Self = Self::known("sgd1", "");
    pub const I_GET_KEY_SGD_2: Self = Self::known("sgd2", "");

    pub const ALL: [Self; 10] = [
        Self::I_AUTHENTICATION_INSURANT,
        Self::I_AUTHORIZATION_INSURANT,
        Self::I_AUTHORIZATION_MANAGEMENT_INSURANT,
        Self::I_ACCOUNT_MANAGEMENT_INSURANT,
        Self::I_DOCUMENT_MANAGEMENT_CONNECT,
        Self::I_DOCUMENT_MANAGEMENT_INSURANT,
        Self::I_OCSP_STATUS_INFORMATION,
        Self::I_PROXY_DIRECTORY_QUERY,
        Self::I_GET_KEY_SGD_1,
        Self::I_GET_KEY_SGD_2,
    ];

    const fn known(module_name: &'static str, suffix: &'static str) -> Self {
        Self {
            module_name: Cow::Borrowed(module_name),
            suffix: Cow::Borrowed(suffix),
        }
    }

    pub fn custom(module_name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            module_name: Cow::Owned(module_name.into()),
            suffix: Cow::Owned(suffix.into()),
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for ServiceInterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suffix.is_empty() {
            f.write_str(&self.module_name)
        } else {
            write!(f, "{}/{}", self.module_name, self.suffix)
        }
    }
}
