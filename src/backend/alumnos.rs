use crate::backend::error::Result;
use crate::backend::{build_url, read_json, send};
use dto::alumno::{Alumno, AlumnoForm, AlumnoGuardado};
use reqwest::Client;

const ALUMNOS: &str = "alumnos";

/// Retrieve every student, without their membership status.
pub async fn retrieve_alumnos(client: &Client, base_url: &str) -> Result<Vec<Alumno>> {
    let url = build_url(base_url, &[ALUMNOS])?;
    let response = send(client.get(url)).await?;
    read_json(response).await
}

pub async fn create_alumno(client: &Client, base_url: &str, form: &AlumnoForm) -> Result<Alumno> {
    let url = build_url(base_url, &[ALUMNOS])?;
    let response = send(client.post(url).json(form)).await?;
    let saved: AlumnoGuardado = read_json(response).await?;
    Ok(saved.into_alumno())
}

pub async fn update_alumno(
    client: &Client,
    base_url: &str,
    alumno_id: &str,
    form: &AlumnoForm,
) -> Result<Alumno> {
    let url = build_url(base_url, &[ALUMNOS, alumno_id])?;
    let response = send(client.put(url).json(form)).await?;
    let saved: AlumnoGuardado = read_json(response).await?;
    Ok(saved.into_alumno())
}
