pub mod device;
pub mod session;
pub mod transport;

pub use device::{speak, Clipboard, Notice, SpeechSynthesizer};
pub use session::{translate, PendingTranslation, SessionState, TranslateOutcome};
pub use transport::{HttpTransport, ProxyReply, ProxyTransport};
