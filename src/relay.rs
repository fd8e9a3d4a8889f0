//! Server-side form mail relay.
//!
//! A [`MailMessage`] collects the envelope and labelled message lines, then
//! hands a rendered [`Envelope`] to a [`MailTransport`]. The SMTP branch is
//! not implemented and reports failure.

use std::env;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SUBJECT: &str = "New message from portfolio";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("missing required fields")]
    MissingFields,
    #[error("line break in {0} header")]
    InvalidHeader(&'static str),
    #[error("SMTP delivery is not implemented (host {0})")]
    SmtpUnsupported(String),
    #[error("mail transport failed: {0}")]
    Transport(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
}

/// What the transport actually sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub to: String,
    pub subject: String,
    pub headers: String,
    pub body: String,
}

impl Envelope {
    /// RFC 5322 style message as fed to `sendmail -t`.
    pub fn to_message(&self) -> String {
        format!(
            "To: {}\r\nSubject: {}\r\n{}\r\n{}",
            self.to, self.subject, self.headers, self.body
        )
    }
}

pub trait MailTransport {
    fn deliver(&self, envelope: &Envelope) -> Result<(), RelayError>;
}

#[derive(Debug, Clone, Default)]
pub struct MailMessage {
    pub to: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub ajax: bool,
    pub smtp: Option<SmtpSettings>,
    lines: Vec<String>,
}

impl MailMessage {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Default::default()
        }
    }

    /// Append one body line. `max_len > 0` cuts the content to that many
    /// characters; a non-empty label renders as `label: content`.
    pub fn add_message(&mut self, content: &str, label: &str, max_len: usize) -> &mut Self {
        let content = if max_len > 0 {
            content.chars().take(max_len).collect::<String>()
        } else {
            content.to_string()
        };
        let line = if label.is_empty() {
            content
        } else {
            format!("{label}: {content}")
        };
        self.lines.push(line);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn envelope(&self) -> Result<Envelope, RelayError> {
        if self.to.is_empty() || self.from_email.is_empty() || self.subject.is_empty() {
            return Err(RelayError::MissingFields);
        }
        // sendmail -t reads recipients from the headers, so no field may
        // open a header line of its own
        for (header, value) in [
            ("To", &self.to),
            ("From", &self.from_name),
            ("Reply-To", &self.from_email),
            ("Subject", &self.subject),
        ] {
            if value.contains(['\r', '\n']) {
                return Err(RelayError::InvalidHeader(header));
            }
        }
        let headers = format!(
            "From: {} <{}>\r\nReply-To: {}\r\nContent-Type: text/plain; charset=UTF-8\r\n",
            self.from_name, self.from_email, self.from_email
        );
        Ok(Envelope {
            to: self.to.clone(),
            subject: self.subject.clone(),
            headers,
            body: self.lines.join("\n"),
        })
    }

    pub fn send<T: MailTransport + ?Sized>(&self, transport: &T) -> Result<(), RelayError> {
        let envelope = self.envelope()?;
        if let Some(smtp) = &self.smtp {
            log::warn!(
                "refusing to relay mail to {} through unimplemented SMTP host {}",
                envelope.to,
                smtp.host
            );
            return Err(RelayError::SmtpUnsupported(smtp.host.clone()));
        }
        transport.deliver(&envelope)?;
        log::info!("relayed contact mail to {}", envelope.to);
        Ok(())
    }
}

/// Caller-facing rendering of a relay result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStatus {
    Sent,
    MissingFields,
    SmtpNotConfigured,
    Failed,
}

impl RelayStatus {
    pub fn from_result(result: &Result<(), RelayError>) -> Self {
        match result {
            Ok(()) => RelayStatus::Sent,
            Err(RelayError::MissingFields) => RelayStatus::MissingFields,
            Err(RelayError::SmtpUnsupported(_)) => RelayStatus::SmtpNotConfigured,
            Err(RelayError::InvalidHeader(_) | RelayError::Transport(_) | RelayError::Io(_)) => {
                RelayStatus::Failed
            }
        }
    }

    pub fn is_success(self) -> bool {
        self == RelayStatus::Sent
    }

    /// `"1"`/`"0"` for ajax callers, a status line otherwise.
    pub fn render(self, ajax: bool) -> &'static str {
        if ajax {
            return if self.is_success() { "1" } else { "0" };
        }
        match self {
            RelayStatus::Sent => "Email sent successfully",
            RelayStatus::MissingFields => "Error: Missing required fields",
            RelayStatus::SmtpNotConfigured => "SMTP not configured",
            RelayStatus::Failed => "Error sending email",
        }
    }
}

/// Fields posted to the relay endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub ajax: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub to: String,
    pub default_subject: String,
    pub smtp: Option<SmtpSettings>,
}

impl RelayConfig {
    pub const TO_VAR: &'static str = "CONTACT_RELAY_TO";
    pub const SUBJECT_VAR: &'static str = "CONTACT_RELAY_SUBJECT";
    pub const SMTP_HOST_VAR: &'static str = "CONTACT_RELAY_SMTP_HOST";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let to = non_empty(Self::TO_VAR).ok_or(ConfigError::Missing(Self::TO_VAR))?;
        Ok(Self {
            to,
            default_subject: non_empty(Self::SUBJECT_VAR)
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            smtp: non_empty(Self::SMTP_HOST_VAR).map(|host| SmtpSettings { host }),
        })
    }

    /// Build the outgoing message for one posted form.
    pub fn message_for(&self, form: &RelayForm) -> MailMessage {
        let name = form.name.trim();
        let email = form.email.trim();
        let mut mail = MailMessage::new(self.to.clone());
        mail.from_name = name.to_string();
        mail.from_email = email.to_string();
        mail.subject = if form.subject.trim().is_empty() {
            self.default_subject.clone()
        } else {
            form.subject.trim().to_string()
        };
        mail.ajax = form.ajax;
        mail.smtp = self.smtp.clone();
        mail.add_message(name, "From", 0)
            .add_message(email, "Email", 0)
            .add_message(&form.message, "Message", 10_000);
        mail
    }
}

/// Hands messages to the platform `sendmail` binary.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct SendmailTransport {
    pub program: String,
}

#[cfg(feature = "ssr")]
impl Default for SendmailTransport {
    fn default() -> Self {
        Self {
            program: "sendmail".to_string(),
        }
    }
}

#[cfg(feature = "ssr")]
impl MailTransport for SendmailTransport {
    fn deliver(&self, envelope: &Envelope) -> Result<(), RelayError> {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let mut child = Command::new(&self.program)
            .args(["-t", "-i"])
            .stdin(Stdio::piped())
            .spawn()?;
        let written = match child.stdin.take() {
            // stdin is dropped at the end of this arm, closing the pipe
            Some(mut stdin) => {
                let date = chrono::Utc::now().to_rfc2822();
                write!(stdin, "Date: {date}\r\n{}", envelope.to_message())
                    .map_err(RelayError::from)
            }
            None => Err(RelayError::Transport(format!(
                "{} did not expose stdin",
                self.program
            ))),
        };
        // reap the child even when the write failed
        let status = child.wait()?;
        if !status.success() {
            // an early exit also breaks the pipe
            return Err(RelayError::Transport(match written {
                Ok(()) => format!("{} exited with {status}", self.program),
                Err(e) => format!("{} exited with {status} ({e})", self.program),
            }));
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryTransport {
        sent: RefCell<Vec<Envelope>>,
        fail: bool,
    }

    impl MailTransport for MemoryTransport {
        fn deliver(&self, envelope: &Envelope) -> Result<(), RelayError> {
            if self.fail {
                return Err(RelayError::Transport("queue full".to_string()));
            }
            self.sent.borrow_mut().push(envelope.clone());
            Ok(())
        }
    }

    fn complete_message() -> MailMessage {
        let mut mail = MailMessage::new("owner@example.com");
        mail.from_name = "Ada".to_string();
        mail.from_email = "ada@example.com".to_string();
        mail.subject = "Hello".to_string();
        mail
    }

    #[test]
    fn test_missing_fields_fail_closed() {
        let transport = MemoryTransport::default();
        for clear in [0, 1, 2] {
            let mut mail = complete_message();
            match clear {
                0 => mail.to.clear(),
                1 => mail.from_email.clear(),
                _ => mail.subject.clear(),
            }
            let res = mail.send(&transport);
            assert!(matches!(res, Err(RelayError::MissingFields)));
            assert_eq!(RelayStatus::from_result(&res).render(true), "0");
            assert_eq!(
                RelayStatus::from_result(&res).render(false),
                "Error: Missing required fields"
            );
        }
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_direct_mail_path() {
        let transport = MemoryTransport::default();
        let mut mail = complete_message();
        mail.add_message("Ada", "Name", 0)
            .add_message("Let's talk pipelines", "", 0);
        let res = mail.send(&transport);
        assert!(res.is_ok());
        assert_eq!(RelayStatus::from_result(&res).render(true), "1");
        assert_eq!(
            RelayStatus::from_result(&res).render(false),
            "Email sent successfully"
        );

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].body, "Name: Ada\nLet's talk pipelines");
        assert_eq!(
            sent[0].headers,
            "From: Ada <ada@example.com>\r\nReply-To: ada@example.com\r\nContent-Type: text/plain; charset=UTF-8\r\n"
        );
        assert!(sent[0].to_message().starts_with("To: owner@example.com\r\nSubject: Hello\r\n"));
    }

    #[test]
    fn test_smtp_branch_does_not_claim_success() {
        let transport = MemoryTransport::default();
        let mut mail = complete_message();
        mail.smtp = Some(SmtpSettings {
            host: "smtp.example.com".to_string(),
        });
        let res = mail.send(&transport);
        assert!(matches!(res, Err(RelayError::SmtpUnsupported(_))));
        assert_eq!(RelayStatus::from_result(&res).render(true), "0");
        assert_eq!(
            RelayStatus::from_result(&res).render(false),
            "SMTP not configured"
        );
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_transport_failure() {
        let transport = MemoryTransport {
            fail: true,
            ..Default::default()
        };
        let res = complete_message().send(&transport);
        assert_eq!(RelayStatus::from_result(&res), RelayStatus::Failed);
        assert_eq!(RelayStatus::Failed.render(false), "Error sending email");
    }

    #[test]
    fn test_add_message_truncates_by_chars() {
        let mut mail = MailMessage::default();
        mail.add_message("héllo world", "Greeting", 5)
            .add_message("untouched", "", 0);
        assert_eq!(mail.lines(), ["Greeting: héllo", "untouched"]);
    }

    #[test]
    fn test_config_from_lookup() {
        let cfg = RelayConfig::from_lookup(|key| match key {
            "CONTACT_RELAY_TO" => Some("owner@example.com".to_string()),
            "CONTACT_RELAY_SMTP_HOST" => Some(" ".to_string()),
            _ => None,
        })
        .expect("config should load");
        assert_eq!(cfg.to, "owner@example.com");
        assert_eq!(cfg.default_subject, DEFAULT_SUBJECT);
        assert_eq!(cfg.smtp, None);

        assert_eq!(
            RelayConfig::from_lookup(|_| None),
            Err(ConfigError::Missing("CONTACT_RELAY_TO"))
        );
    }

    #[test]
    fn test_line_breaks_in_headers_are_refused() {
        let cfg = RelayConfig {
            to: "owner@example.com".to_string(),
            default_subject: DEFAULT_SUBJECT.to_string(),
            smtp: None,
        };
        let transport = MemoryTransport::default();

        let form = RelayForm {
            name: "Mallory".to_string(),
            email: "m@evil.test\r\nBcc: victim1@example.org, victim2@example.org".to_string(),
            subject: "hi".to_string(),
            message: "spam".to_string(),
            ajax: false,
        };
        let res = cfg.message_for(&form).send(&transport);
        assert!(matches!(res, Err(RelayError::InvalidHeader("Reply-To"))));
        assert_eq!(RelayStatus::from_result(&res), RelayStatus::Failed);

        let form = RelayForm {
            email: "m@example.org".to_string(),
            subject: "hi\nCc: victim3@example.org".to_string(),
            ..form
        };
        let res = cfg.message_for(&form).send(&transport);
        assert!(matches!(res, Err(RelayError::InvalidHeader("Subject"))));
        assert_eq!(RelayStatus::from_result(&res).render(true), "0");

        let mut mail = complete_message();
        mail.from_name = "Ada\rX-Evil: 1".to_string();
        assert!(matches!(mail.envelope(), Err(RelayError::InvalidHeader("From"))));

        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_message_for_form() {
        let cfg = RelayConfig {
            to: "owner@example.com".to_string(),
            default_subject: DEFAULT_SUBJECT.to_string(),
            smtp: None,
        };
        let form = RelayForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hi".to_string(),
            ajax: true,
        };
        let mail = cfg.message_for(&form);
        assert_eq!(mail.subject, DEFAULT_SUBJECT);
        assert_eq!(mail.from_name, "Ada");
        assert!(mail.ajax);
        assert_eq!(mail.lines(), ["From: Ada", "Email: ada@example.com", "Message: Hi"]);
    }
}

#[cfg(all(test, feature = "ssr"))]
mod sendmail_tests {
    use super::*;

    fn envelope() -> Envelope {
        let mut mail = MailMessage::new("owner@example.com");
        mail.from_name = "Ada".to_string();
        mail.from_email = "ada@example.com".to_string();
        mail.subject = "Hello".to_string();
        mail.add_message("Hi", "Message", 0);
        mail.envelope().expect("complete message")
    }

    #[test]
    fn test_failing_program_is_a_transport_error() {
        let transport = SendmailTransport {
            program: "false".to_string(),
        };
        let res = transport.deliver(&envelope());
        assert!(matches!(res, Err(RelayError::Transport(_))));
    }

    #[test]
    fn test_missing_program_is_an_io_error() {
        let transport = SendmailTransport {
            program: "/nonexistent/portfolio-sendmail".to_string(),
        };
        let res = transport.deliver(&envelope());
        assert!(matches!(res, Err(RelayError::Io(_))));
    }
}
