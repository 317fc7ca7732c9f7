use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result};
use anyhow::{bail, Context};
use log::info;
use rustls::{
    pki_types::{CertificateDer, PrivateKeyDer},
    server::ServerConfig,
};
use rustls_pemfile::{certs, private_key};
use std::{fs::File, io::BufReader, path::{Path, PathBuf}};

/* ---------- configuration ------------------------------------------------ */

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    bind: String,
    dist_dir: PathBuf,
    tls: Option<(PathBuf, PathBuf)>,
}

impl Settings {
    /// Reads `CONSOLE_BIND`, `CONSOLE_DIST_DIR`, `CONSOLE_TLS_CERT` and
    /// `CONSOLE_TLS_KEY` through `var`.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind = var("CONSOLE_BIND").unwrap_or_else(|| "0.0.0.0:8444".to_string());
        let dist_dir = var("CONSOLE_DIST_DIR")
            .map(PathBuf::from)
            // output of `trunk build`
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist"));

        let tls = match (var("CONSOLE_TLS_CERT"), var("CONSOLE_TLS_KEY")) {
            (Some(cert), Some(key)) => Some((PathBuf::from(cert), PathBuf::from(key))),
            (None, None) => None,
            _ => bail!("CONSOLE_TLS_CERT and CONSOLE_TLS_KEY must be set together"),
        };

        Ok(Self { bind, dist_dir, tls })
    }

    fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok().filter(|v| !v.is_empty()))
    }
}

/* ---------- TLS ---------------------------------------------------------- */

fn build_tls_config(cert_path: &Path, key_path: &Path) -> anyhow::Result<ServerConfig> {
    let mut r = BufReader::new(
        File::open(cert_path).with_context(|| format!("open cert {}", cert_path.display()))?,
    );
    let certs: Vec<CertificateDer<'static>> =
        certs(&mut r).collect::<Result<_, _>>().context("parse cert")?;

    let mut r = BufReader::new(
        File::open(key_path).with_context(|| format!("open key {}", key_path.display()))?,
    );
    let key: PrivateKeyDer<'static> = private_key(&mut r)
        .context("parse key")?
        .context("no private key in key file")?;

    ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("TLS config")
}

/* ---------- SPA fallback (index.html) ------------------------------------ */

async fn spa_fallback(req: HttpRequest, dist_dir: web::Data<PathBuf>) -> Result<HttpResponse> {
    Ok(NamedFile::open(dist_dir.join("index.html"))?.into_response(&req))
}

/* ---------- main --------------------------------------------------------- */

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    info!("serving console bundle from {}", settings.dist_dir.display());

    let dist_dir = settings.dist_dir.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(dist_dir.clone()))
            .service(Files::new("/", &dist_dir).index_file("index.html"))
            .default_service(web::to(spa_fallback))
    });

    let server = match &settings.tls {
        Some((cert, key)) => {
            info!("listening on https://{}", settings.bind);
            server.bind_rustls_0_23(&settings.bind, build_tls_config(cert, key)?)?
        }
        None => {
            info!("listening on http://{}", settings.bind);
            server.bind(&settings.bind)?
        }
    };

    server.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_to_plain_http_on_8444() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s.bind, "0.0.0.0:8444");
        assert!(s.dist_dir.ends_with("frontend/dist"));
        assert!(s.tls.is_none());
    }

    #[test]
    fn tls_needs_cert_and_key() {
        let s = Settings::from_lookup(lookup(&[
            ("CONSOLE_TLS_CERT", "certs/dev-cert.pem"),
            ("CONSOLE_TLS_KEY", "certs/dev-key.pem"),
            ("CONSOLE_BIND", "127.0.0.1:443"),
        ]))
        .unwrap();
        assert_eq!(
            s.tls,
            Some((PathBuf::from("certs/dev-cert.pem"), PathBuf::from("certs/dev-key.pem")))
        );
        assert_eq!(s.bind, "127.0.0.1:443");

        let err = Settings::from_lookup(lookup(&[("CONSOLE_TLS_CERT", "c.pem")])).unwrap_err();
        assert!(err.to_string().contains("together"), "got: {err}");
    }

    #[test]
    fn missing_cert_file_is_an_error() {
        let err = build_tls_config(Path::new("/nonexistent/cert.pem"), Path::new("/nonexistent/key.pem"))
            .unwrap_err();
        assert!(err.to_string().contains("open cert"), "got: {err}");
    }
}
