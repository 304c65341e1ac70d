use async_trait::async_trait;
use mockall::mock;
use pubapp::{
    error::LoadError,
    page::Page,
    source::DataSource,
};
use pubcore::model::PublicationData;

mock! {
    pub Source {}

    #[async_trait]
    impl DataSource for Source {
        async fn fetch(&self) -> Result<PublicationData, LoadError>;
    }
}

mock! {
    pub Page {}

    impl Page for Page {
        fn has_container(&self, id: &str) -> bool;
        fn set_content(&mut self, id: &str, html: String);
    }
}
