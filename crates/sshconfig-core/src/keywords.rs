//! Registry of the keywords documented in `ssh_config(5)`.
//!
//! The registry is advisory: the parser accepts any keyword.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Client keywords in their documented casing.
pub const STANDARD_KEYWORDS: &[&str] = &[
    "Host",
    "Match",
    "AddKeysToAgent",
    "AddressFamily",
    "BatchMode",
    "BindAddress",
    "BindInterface",
    "CanonicalDomains",
    "CanonicalizeFallbackLocal",
    "CanonicalizeHostname",
    "CanonicalizeMaxDots",
    "CanonicalizePermittedCNAMEs",
    "CASignatureAlgorithms",
    "CertificateFile",
    "ChannelTimeout",
    "CheckHostIP",
    "Ciphers",
    "ClearAllForwardings",
    "Compression",
    "ConnectionAttempts",
    "ConnectTimeout",
    "ControlMaster",
    "ControlPath",
    "ControlPersist",
    "DynamicForward",
    "EnableEscapeCommandline",
    "EnableSSHKeysign",
    "EscapeChar",
    "ExitOnForwardFailure",
    "FingerprintHash",
    "ForkAfterAuthentication",
    "ForwardAgent",
    "ForwardX11",
    "ForwardX11Timeout",
    "ForwardX11Trusted",
    "GatewayPorts",
    "GlobalKnownHostsFile",
    "GSSAPIAuthentication",
    "GSSAPIDelegateCredentials",
    "HashKnownHosts",
    "HostbasedAcceptedAlgorithms",
    "HostbasedAuthentication",
    "HostKeyAlgorithms",
    "HostKeyAlias",
    "Hostname",
    "IdentitiesOnly",
    "IdentityAgent",
    "IdentityFile",
    "IgnoreUnknown",
    "Include",
    "IPQoS",
    "KbdInteractiveAuthentication",
    "KbdInteractiveDevices",
    "KexAlgorithms",
    "KnownHostsCommand",
    "LocalCommand",
    "LocalForward",
    "LogLevel",
    "LogVerbose",
    "MACs",
    "NoHostAuthenticationForLocalhost",
    "NumberOfPasswordPrompts",
    "ObscureKeystrokeTiming",
    "PasswordAuthentication",
    "PermitLocalCommand",
    "PermitRemoteOpen",
    "PKCS11Provider",
    "Port",
    "PreferredAuthentications",
    "ProxyCommand",
    "ProxyJump",
    "ProxyUseFdpass",
    "PubkeyAcceptedAlgorithms",
    "PubkeyAuthentication",
    "RekeyLimit",
    "RemoteCommand",
    "RemoteForward",
    "RequestTTY",
    "RequiredRSASize",
    "RevokedHostKeys",
    "SecurityKeyProvider",
    "SendEnv",
    "ServerAliveCountMax",
    "ServerAliveInterval",
    "SessionType",
    "SetEnv",
    "StdinNull",
    "StreamLocalBindMask",
    "StreamLocalBindUnlink",
    "StrictHostKeyChecking",
    "SyslogFacility",
    "TCPKeepAlive",
    "Tag",
    "Tunnel",
    "TunnelDevice",
    "UpdateHostKeys",
    "User",
    "UserKnownHostsFile",
    "VerifyHostKeyDNS",
    "VisualHostKey",
    "XAuthLocation",
];

/// Keywords whose values accumulate instead of the first one winning.
const CUMULATIVE_KEYWORDS: &[&str] = &[
    "CertificateFile",
    "DynamicForward",
    "IdentityFile",
    "IgnoreUnknown",
    "Include",
    "LocalForward",
    "Match",
    "RemoteForward",
    "SendEnv",
    "SetEnv",
];

/// Lowercased keyword to documented casing.
static REGISTRY: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    STANDARD_KEYWORDS
        .iter()
        .map(|keyword| (keyword.to_ascii_lowercase(), *keyword))
        .collect()
});

/// Returns true if `keyword` is a documented client keyword, ignoring case.
pub fn is_standard_keyword(keyword: &str) -> bool {
    canonical_keyword(keyword).is_some()
}

/// Returns the documented casing of `keyword`.
pub fn canonical_keyword(keyword: &str) -> Option<&'static str> {
    REGISTRY.get(&keyword.to_ascii_lowercase()).copied()
}

/// Returns true if repeating `keyword` adds values rather than being ignored.
pub fn is_cumulative_keyword(keyword: &str) -> bool {
    CUMULATIVE_KEYWORDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(keyword))
}
