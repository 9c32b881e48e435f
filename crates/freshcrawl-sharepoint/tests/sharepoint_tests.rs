use freshcrawl_core::{CrawlError, Settings};
use freshcrawl_sharepoint::{FolderLink, SharePointStore, folder_url, title_url};

#[test]
fn test_copy_link_drives_listing_url() {
    let link = FolderLink::parse(
        "https://fabrikam.sharepoint.com/:f:/r/sites/axion/Shared%20Documents/Specs?csf=1&web=1",
    )
    .unwrap();

    assert_eq!(link.site, "axion");
    assert_eq!(
        folder_url(&link.origin, &link.site, &link.folder_path),
        "https://fabrikam.sharepoint.com/sites/axion/_api/web/GetFolderByServerRelativeUrl(@p)\
         ?@p='%2Fsites%2Faxion%2FShared%20Documents%2FSpecs'&$expand=Files,Folders"
    );
    assert_eq!(
        title_url(&link.origin, &link.site),
        "https://fabrikam.sharepoint.com/sites/axion/_api/web?$select=Title"
    );
}

#[test]
fn test_library_view_link_uses_id() {
    let link = FolderLink::parse(
        "https://contoso.sharepoint.com/sites/axion/Shared%20Documents/Forms/AllItems.aspx\
         ?id=%2Fsites%2Faxion%2FShared%20Documents%2FReports%2FQ1&viewid=1234",
    )
    .unwrap();
    assert_eq!(link.folder_path, "/sites/axion/Shared Documents/Reports/Q1");
}

#[test]
fn test_library_view_link_without_id_is_library_root() {
    let link = FolderLink::parse(
        "https://contoso.sharepoint.com/sites/axion/Shared%20Documents/Forms/AllItems.aspx",
    )
    .unwrap();
    assert_eq!(link.folder_path, "/sites/axion/Shared Documents");
}

#[test]
fn test_invalid_links() {
    for link in [
        "not a url",
        "ftp://contoso.sharepoint.com/sites/axion",
        "https://contoso.sharepoint.com/personal/jdoe/Documents",
        "https://contoso.sharepoint.com/sites/",
    ] {
        match FolderLink::parse(link) {
            Err(CrawlError::InvalidLink { link: shown, .. }) => assert_eq!(shown, link),
            other => panic!("expected invalid link for {link}, got {other:?}"),
        }
    }
}

#[test]
fn test_store_keeps_settings() {
    let settings = Settings::from_toml(r#"web_origin = "https://fabrikam.sharepoint.com/""#).unwrap();
    let store = SharePointStore::new(settings).unwrap();
    assert_eq!(store.settings().web_origin, "https://fabrikam.sharepoint.com");
}
