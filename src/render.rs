mod file_output;
mod options;

use self::file_output::RenderedFileOutput;
pub use self::options::{RenderFormat, RenderOptions};
use crate::{error::Error, file_output::FileOutput};
use colored::Colorize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Renders a result of rewriting a layout file.
pub async fn render_file(
    output: &FileOutput,
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    if !options.renders(output) {
        return Ok(());
    }

    match options.format() {
        RenderFormat::Text => render_text(output, writer).await,
        RenderFormat::Json => {
            render_line(
                writer,
                &serde_json::to_string(&RenderedFileOutput::from(output))?,
            )
            .await
        }
    }
}

async fn render_text(
    output: &FileOutput,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    let path = output.path().display().to_string();

    match output.result() {
        Ok(success) => {
            render_line(
                writer,
                &format!(
                    "{}\t{}",
                    path.yellow(),
                    format!("{} rewritten", success.rewritten()).green()
                ),
            )
            .await?;

            if let Some(content) = success.content() {
                render_line(writer, content).await?;
            }
        }
        Err(error) => {
            render_line(
                writer,
                &format!("{}\t{}\t{error}", path.yellow(), "ERROR".red()),
            )
            .await?
        }
    }

    Ok(())
}

async fn render_line(writer: &mut (impl AsyncWrite + Unpin), string: &str) -> Result<(), Error> {
    writer.write_all(string.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_output::FileSuccess;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    async fn render(output: &FileOutput, options: &RenderOptions) -> String {
        colored::control::set_override(false);

        let mut buffer = vec![];
        render_file(output, options, &mut buffer).await.unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[tokio::test]
    async fn render_success_as_text() {
        assert_eq!(
            render(
                &FileOutput::new("layout/main.xml".into(), Ok(FileSuccess::new(2))),
                &RenderOptions::new(),
            )
            .await,
            "layout/main.xml\t2 rewritten\n"
        );
    }

    #[tokio::test]
    async fn render_error_as_text() {
        assert_eq!(
            render(
                &FileOutput::new("layout/main.xml".into(), Err(Error::Rewrite)),
                &RenderOptions::new(),
            )
            .await,
            "layout/main.xml\tERROR\tlayout rewrite failed\n"
        );
    }

    #[tokio::test]
    async fn render_content_as_text() {
        assert_eq!(
            render(
                &FileOutput::new(
                    "main.xml".into(),
                    Ok(FileSuccess::new(0).set_content(Some("<a/>".into())))
                ),
                &RenderOptions::new(),
            )
            .await,
            "main.xml\t0 rewritten\n<a/>\n"
        );
    }

    #[tokio::test]
    async fn skip_unchanged_file() {
        let output = FileOutput::new("main.xml".into(), Ok(FileSuccess::new(0)));

        assert_eq!(render(&output, &RenderOptions::new()).await, "");
        assert_eq!(
            render(&output, &RenderOptions::new().set_show_unchanged(true)).await,
            "main.xml\t0 rewritten\n"
        );
    }

    #[tokio::test]
    async fn render_success_as_json() {
        let output = render(
            &FileOutput::new("layout/main.xml".into(), Ok(FileSuccess::new(2))),
            &RenderOptions::new().set_format(RenderFormat::Json),
        )
        .await;

        assert_snapshot!(output.trim_end(), @r#"{"path":"layout/main.xml","rewritten":2}"#);
    }

    #[tokio::test]
    async fn render_dry_run_content_as_json() {
        let output = render(
            &FileOutput::new(
                "layout/main.xml".into(),
                Ok(FileSuccess::new(1).set_content(Some("<a/>".into()))),
            ),
            &RenderOptions::new().set_format(RenderFormat::Json),
        )
        .await;

        assert_snapshot!(output.trim_end(), @r#"{"path":"layout/main.xml","rewritten":1,"content":"<a/>"}"#);
    }

    #[tokio::test]
    async fn render_error_as_json() {
        let output = render(
            &FileOutput::new("layout/main.xml".into(), Err(Error::Rewrite)),
            &RenderOptions::new().set_format(RenderFormat::Json),
        )
        .await;

        assert_snapshot!(output.trim_end(), @r#"{"path":"layout/main.xml","error":"layout rewrite failed"}"#);
    }
}
