//! Topic → learning-resource lookup.
//!
//! A topic matches a key when its lowercased name contains the key. The longest
//! matching key wins; among equally long keys the earlier table entry wins.

/// Returned when no key matches.
pub const DEFAULT_RESOURCE: &str = "https://developer.mozilla.org/en-US/docs/Learn";

const RESOURCE_TABLE: &[(&str, &str)] = &[
    // Web fundamentals
    ("html", "https://developer.mozilla.org/en-US/docs/Learn/HTML"),
    ("html basics", "https://developer.mozilla.org/en-US/docs/Learn/HTML/Introduction_to_HTML"),
    ("html5", "https://developer.mozilla.org/en-US/docs/Web/HTML"),
    ("css", "https://developer.mozilla.org/en-US/docs/Learn/CSS"),
    ("css basics", "https://developer.mozilla.org/en-US/docs/Learn/CSS/First_steps"),
    ("css3", "https://developer.mozilla.org/en-US/docs/Web/CSS"),
    ("javascript", "https://developer.mozilla.org/en-US/docs/Learn/JavaScript"),
    ("javascript basics", "https://developer.mozilla.org/en-US/docs/Learn/JavaScript/First_steps"),
    ("js", "https://developer.mozilla.org/en-US/docs/Web/JavaScript"),
    // Programming
    ("python", "https://docs.python.org/3/tutorial/"),
    ("python basics", "https://docs.python.org/3/tutorial/introduction.html"),
    ("java", "https://docs.oracle.com/javase/tutorial/"),
    ("c++", "https://cplusplus.com/doc/tutorial/"),
    ("c", "https://www.learn-c.org/"),
    // Data structures & algorithms
    ("data structures", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Data_structures"),
    ("algorithms", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide"),
    ("arrays", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array"),
    ("linked lists", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide/Indexed_collections"),
    ("trees", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide"),
    ("graphs", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide"),
    // Web development
    ("dom", "https://developer.mozilla.org/en-US/docs/Web/API/Document_Object_Model"),
    ("dom manipulation", "https://developer.mozilla.org/en-US/docs/Learn/JavaScript/Client-side_web_APIs/Manipulating_documents"),
    ("ajax", "https://developer.mozilla.org/en-US/docs/Web/Guide/AJAX"),
    ("fetch api", "https://developer.mozilla.org/en-US/docs/Web/API/Fetch_API"),
    ("promises", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Promise"),
    ("async/await", "https://developer.mozilla.org/en-US/docs/Learn/JavaScript/Asynchronous/Promises"),
    // Frameworks
    ("react", "https://react.dev/learn"),
    ("vue", "https://vuejs.org/guide/introduction.html"),
    ("angular", "https://angular.io/docs"),
    ("node.js", "https://nodejs.org/en/docs/guides/getting-started-guide"),
    ("express", "https://expressjs.com/en/starter/installing.html"),
    ("django", "https://docs.djangoproject.com/en/stable/intro/tutorial01/"),
    ("flask", "https://flask.palletsprojects.com/en/latest/quickstart/"),
    // Databases
    ("sql", "https://www.w3schools.com/sql/"),
    ("mysql", "https://dev.mysql.com/doc/"),
    ("postgresql", "https://www.postgresql.org/docs/current/tutorial.html"),
    ("mongodb", "https://www.mongodb.com/docs/manual/tutorial/"),
    ("database design", "https://developer.mozilla.org/en-US/docs/Learn/Server-side/First_steps/Introduction"),
    // Version control
    ("git", "https://git-scm.com/doc"),
    ("github", "https://docs.github.com/en/get-started"),
    ("version control", "https://git-scm.com/book/en/v2/Getting-Started-About-Version-Control"),
    // APIs
    ("rest api", "https://developer.mozilla.org/en-US/docs/Glossary/REST"),
    ("restful", "https://developer.mozilla.org/en-US/docs/Glossary/REST"),
    ("graphql", "https://graphql.org/learn/"),
    ("api", "https://developer.mozilla.org/en-US/docs/Learn/JavaScript/Client-side_web_APIs/Introduction"),
    // Testing
    ("unit testing", "https://developer.mozilla.org/en-US/docs/Learn/Tools_and_testing/Cross_browser_testing"),
    ("testing", "https://developer.mozilla.org/en-US/docs/Learn/Tools_and_testing"),
    ("jest", "https://jestjs.io/docs/getting-started"),
    // DevOps
    ("docker", "https://docs.docker.com/get-started/"),
    ("kubernetes", "https://kubernetes.io/docs/tutorials/"),
    ("ci/cd", "https://developer.mozilla.org/en-US/docs/Learn/Tools_and_testing/Understanding_client-side_tools"),
    // Security
    ("web security", "https://developer.mozilla.org/en-US/docs/Web/Security"),
    ("https", "https://developer.mozilla.org/en-US/docs/Glossary/HTTPS"),
    ("authentication", "https://developer.mozilla.org/en-US/docs/Web/HTTP/Authentication"),
    ("oauth", "https://oauth.net/2/"),
    // Performance
    ("performance", "https://developer.mozilla.org/en-US/docs/Web/Performance"),
    ("optimization", "https://developer.mozilla.org/en-US/docs/Learn/Performance"),
    // Mobile
    ("responsive design", "https://developer.mozilla.org/en-US/docs/Learn/CSS/CSS_layout/Responsive_Design"),
    ("mobile development", "https://developer.mozilla.org/en-US/docs/Web/Progressive_web_apps"),
    // Cloud
    ("aws", "https://aws.amazon.com/getting-started/"),
    ("azure", "https://learn.microsoft.com/en-us/azure/"),
    ("cloud computing", "https://aws.amazon.com/what-is-cloud-computing/"),
    // AI & ML
    ("machine learning", "https://developers.google.com/machine-learning/crash-course"),
    ("deep learning", "https://www.deeplearning.ai/"),
    ("neural networks", "https://www.tensorflow.org/tutorials"),
    ("tensorflow", "https://www.tensorflow.org/learn"),
    ("pytorch", "https://pytorch.org/tutorials/"),
    // Data science
    ("data analysis", "https://pandas.pydata.org/docs/getting_started/intro_tutorials/"),
    ("pandas", "https://pandas.pydata.org/docs/getting_started/index.html"),
    ("numpy", "https://numpy.org/doc/stable/user/absolute_beginners.html"),
    ("data visualization", "https://matplotlib.org/stable/tutorials/index.html"),
];

/// Resolves a topic name to a learning-resource URL.
///
/// The longest key contained in the topic wins, not the first one in table
/// order, so short keys like `c` do not capture "Version Control".
pub fn resource_link(topic_name: &str) -> &'static str {
    let topic = topic_name.to_lowercase();
    let mut best: Option<(&str, &'static str)> = None;
    for &(key, url) in RESOURCE_TABLE {
        if !topic.contains(key) {
            continue;
        }
        // strictly longer only, so the earlier entry keeps ties
        if best.map_or(true, |(best_key, _)| key.len() > best_key.len()) {
            best = Some((key, url));
        }
    }
    best.map_or(DEFAULT_RESOURCE, |(_, url)| url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(resource_link("PYTHON"), "https://docs.python.org/3/tutorial/");
    }

    #[test]
    fn test_longest_key_wins() {
        assert_eq!(
            resource_link("HTML Basics"),
            "https://developer.mozilla.org/en-US/docs/Learn/HTML/Introduction_to_HTML"
        );
        assert_eq!(
            resource_link("Python Basics for Data"),
            "https://docs.python.org/3/tutorial/introduction.html"
        );
        // "cloud computing" outranks the single-letter "c" key
        assert_eq!(
            resource_link("Intro to Cloud Computing"),
            "https://aws.amazon.com/what-is-cloud-computing/"
        );
        assert_eq!(
            resource_link("Version Control"),
            "https://git-scm.com/book/en/v2/Getting-Started-About-Version-Control"
        );
    }

    #[test]
    fn test_equal_length_tie_keeps_table_order() {
        // "trees" and "react" are both five letters; "trees" is listed first
        assert_eq!(
            resource_link("React trees"),
            "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide"
        );
    }

    #[test]
    fn test_no_match_falls_back_to_default() {
        assert_eq!(resource_link("Subnetting"), DEFAULT_RESOURCE);
        assert_eq!(resource_link(""), DEFAULT_RESOURCE);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        assert_eq!(resource_link("SIEM Tools"), resource_link("SIEM Tools"));
    }
}
