//! Incrementally read response bodies for file downloads

use bytes::{Bytes, BytesMut};
use futures::stream::{Stream, StreamExt};
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{Error, Result};

type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// Streaming body of a successful download.
///
/// Nothing beyond the status line and headers has been read when this is
/// returned; chunks are pulled from the connection on demand.
pub struct FileStream {
    status: StatusCode,
    headers: HeaderMap,
    content_length: Option<u64>,
    inner: ByteStream,
}

impl FileStream {
    pub(crate) fn new(response: Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            content_length: response.content_length(),
            inner: Box::pin(response.bytes_stream()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Next chunk of the body, or `None` at the end.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        self.inner.next().await.transpose().map_err(Error::from)
    }

    /// Read the remaining body into memory.
    pub async fn bytes(mut self) -> Result<Bytes> {
        let mut buffer = BytesMut::new();
        while let Some(chunk) = self.chunk().await? {
            buffer.extend_from_slice(&chunk);
        }
        Ok(buffer.freeze())
    }

    /// Copy the remaining body into `writer`, returning the number of bytes
    /// written.
    pub async fn copy_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.chunk().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }
}

impl std::fmt::Debug for FileStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStream")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

impl Stream for FileStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner
            .as_mut()
            .poll_next(cx)
            .map(|item| item.map(|chunk| chunk.map_err(Error::from)))
    }
}

