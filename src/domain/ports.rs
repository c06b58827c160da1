use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// Replaces `path` with `data` and returns the number of bytes written.
    /// A failed write must leave any previous file at `path` untouched.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<usize>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &str;
    fn extension(&self) -> &str;
    fn model_names(&self) -> Vec<String>;
    fn fail_fast(&self) -> bool;
}
