//! Fallback messages for failed requests.
//!
//! Guarantees every failing [`portale_types::ApiResult`] carries an
//! actionable message when the server did not supply one. Messages are the
//! fixed Italian strings the application shows its users.

/// Default message for a transport-level failure (status `0`).
pub(crate) const NETWORK_ERROR: &str = "Errore di rete: impossibile contattare il server";

/// The fixed message for a status code, used only when the response body
/// did not supply one.
#[must_use]
pub fn default_message(status: u16) -> &'static str {
    match status {
        0 => NETWORK_ERROR,
        401 => "Non autorizzato",
        403 => "Accesso negato",
        404 => "Risorsa non trovata",
        422 => "Dati non validi",
        s if s >= 500 => "Errore del server",
        _ => "Richiesta non riuscita",
    }
}

/// Message for a request that failed before an HTTP response was obtained.
///
/// When the failure is a connect-level one (DNS, refused connection,
/// timeout), the message names the configured base URL so a wrong backend
/// address is diagnosable without server-side logs.
pub(crate) fn transport_message(err: &reqwest::Error, base_url: &str) -> String {
    if is_connect_failure(err) {
        format!("{NETWORK_ERROR}. Verificare che il backend sia raggiungibile su {base_url}")
    } else {
        NETWORK_ERROR.to_string()
    }
}

fn is_connect_failure(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.to_string().contains("error sending request")
}
