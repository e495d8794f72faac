/// Route path for a page name: lower-cased, each whitespace run replaced by
/// a single `-`, prefixed with `/`. Runs at either end become dashes too.
#[must_use]
pub fn create_page_url(page_name: &str) -> String {
    let mut url = String::with_capacity(page_name.len() + 1);
    url.push('/');
    let mut in_run = false;
    for c in page_name.chars() {
        if c.is_whitespace() {
            if !in_run {
                url.push('-');
            }
            in_run = true;
        } else {
            url.extend(c.to_lowercase());
            in_run = false;
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::create_page_url;

    #[test]
    fn single_word() {
        assert_eq!(create_page_url("Professionals"), "/professionals");
    }

    #[test]
    fn spaces_become_dashes() {
        assert_eq!(create_page_url("My Page"), "/my-page");
        assert_eq!(create_page_url("Pending   Approval"), "/pending-approval");
    }

    #[test]
    fn edge_whitespace_is_kept_as_dashes() {
        assert_eq!(create_page_url(" My Page"), "/-my-page");
        assert_eq!(create_page_url("Briefs\t"), "/briefs-");
    }

    #[test]
    fn empty_name_is_root() {
        assert_eq!(create_page_url(""), "/");
    }
}
