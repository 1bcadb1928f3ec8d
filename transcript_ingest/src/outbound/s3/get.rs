use anyhow::Context;
use aws_sdk_s3 as s3;

/// Reads the whole body of a transcript object
#[tracing::instrument(skip(client))]
pub(super) async fn get_object_bytes(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<Vec<u8>> {
    let resp = client.get_object().bucket(bucket).key(key).send().await;

    let resp = match resp {
        Ok(resp) => resp,
        Err(e) if e.as_service_error().map(|e| e.is_no_such_key()) == Some(true) => {
            anyhow::bail!("transcript object {key} does not exist in bucket {bucket}");
        }
        Err(e) => {
            return Err(e).context(format!(
                "could not get transcript object {key} from bucket {bucket}"
            ));
        }
    };

    tracing::trace!(content_length=?resp.content_length(), "reading transcript body");

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect transcript body")?;
    Ok(body.into_bytes().to_vec())
}
