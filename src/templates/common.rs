//! Shared workflow fragments
//!
//! Step blocks that recur across templates. Fragments are emitted at the
//! standard six-space step indentation and always end with a newline;
//! callers insert the blank line between steps.

/// `on:` trigger for push to main.
pub(super) const ON_PUSH: &str = "\
on:
  push:
    branches: [main]

";

/// `on:` trigger for push to main plus manual dispatch.
pub(super) const ON_PUSH_DISPATCH: &str = "\
on:
  push:
    branches: [main]
  workflow_dispatch:

";

/// Anonymous checkout step.
pub(super) const CHECKOUT: &str = "      - uses: actions/checkout@v4\n";

/// Named checkout step.
pub(super) const CHECKOUT_NAMED: &str = "      - name: Checkout code
        uses: actions/checkout@v4
";

/// OIDC login against Azure. Credentials stay placeholder references.
pub(super) const AZURE_LOGIN: &str = "      - name: Login to Azure
        uses: azure/login@v2
        with:
          client-id: ${{ secrets.AZURE_CLIENT_ID }}
          tenant-id: ${{ secrets.AZURE_TENANT_ID }}
          subscription-id: ${{ secrets.AZURE_SUBSCRIPTION_ID }}
";

/// Unconditional Azure session teardown.
pub(super) const AZURE_LOGOUT: &str = "      - name: Azure Logout
        if: always()
        run: az logout
";

/// AWS credential configuration for the docker registry flows.
pub(super) const CONFIGURE_AWS_CREDENTIALS: &str = "      - name: Configure AWS credentials
        uses: aws-actions/configure-aws-credentials@v4
        with:
          aws-access-key-id: ${{ secrets.AWS_ACCESS_KEY_ID }}
          aws-secret-access-key: ${{ secrets.AWS_SECRET_ACCESS_KEY }}
          aws-region: ${{ env.AWS_REGION }}
";

/// Amazon ECR login step, exposing the registry via step outputs.
pub(super) const ECR_LOGIN: &str = "      - name: Login to Amazon ECR
        id: login-ecr
        uses: aws-actions/amazon-ecr-login@v2
";

/// Heroku deploy step for the given app name.
pub(super) fn heroku_deploy(app: &str) -> String {
    let mut step = String::from(
        "      - name: Deploy to Heroku
        uses: akhileshns/heroku-deploy@v3.13.15
        with:
          heroku_api_key: ${{ secrets.HEROKU_API_KEY }}
",
    );
    step.push_str(&format!("          heroku_app_name: {app}\n"));
    step.push_str("          heroku_email: your-email@example.com\n");
    step
}

/// Elastic Beanstalk deploy step.
pub(super) fn beanstalk_deploy(application: &str, environment: &str, package: &str) -> String {
    let mut step = String::from(
        "      - name: Deploy to AWS Elastic Beanstalk
        uses: einaregilsson/beanstalk-deploy@v21
        with:
          aws_access_key: ${{ secrets.AWS_ACCESS_KEY_ID }}
          aws_secret_key: ${{ secrets.AWS_SECRET_ACCESS_KEY }}
",
    );
    step.push_str(&format!("          application_name: {application}\n"));
    step.push_str(&format!("          environment_name: {environment}\n"));
    step.push_str("          version_label: ${{ github.sha }}\n");
    step.push_str("          region: us-east-1\n");
    step.push_str(&format!("          deployment_package: {package}\n"));
    step
}

/// Python toolchain setup; `cache` adds the built-in pip cache.
pub(super) fn setup_python(version: &str, cache: bool) -> String {
    let mut step = String::from(
        "      - name: Set up Python
        uses: actions/setup-python@v5
        with:
",
    );
    step.push_str(&format!("          python-version: {version}\n"));
    if cache {
        step.push_str("          cache: 'pip'\n");
    }
    step
}

/// Node toolchain setup; `cache` adds the built-in npm cache.
pub(super) fn setup_node(version: &str, cache: bool) -> String {
    let mut step = String::from(
        "      - name: Set up Node.js
        uses: actions/setup-node@v4
        with:
",
    );
    step.push_str(&format!("          node-version: {version}\n"));
    if cache {
        step.push_str("          cache: 'npm'\n");
    }
    step
}

/// JDK setup; `cache` names the build tool whose cache to enable.
pub(super) fn setup_java(version: &str, cache: Option<&str>) -> String {
    let mut step = String::from(
        "      - name: Set up JDK
        uses: actions/setup-java@v4
        with:
",
    );
    step.push_str(&format!("          java-version: {version}\n"));
    step.push_str("          distribution: 'temurin'\n");
    if let Some(tool) = cache {
        step.push_str(&format!("          cache: '{tool}'\n"));
    }
    step
}

/// Go toolchain setup; `cache` enables the built-in module cache.
pub(super) fn setup_go(version: &str, cache: bool) -> String {
    let mut step = String::from(
        "      - name: Set up Go
        uses: actions/setup-go@v5
        with:
",
    );
    step.push_str(&format!("          go-version: {version}\n"));
    if cache {
        step.push_str("          cache: true\n");
    }
    step
}

/// `env:` block attached to a run step that shells out to the AWS CLI.
pub(super) fn aws_run_env(region: bool) -> String {
    let mut block = String::from(
        "        env:
          AWS_ACCESS_KEY_ID: ${{ secrets.AWS_ACCESS_KEY_ID }}
          AWS_SECRET_ACCESS_KEY: ${{ secrets.AWS_SECRET_ACCESS_KEY }}
",
    );
    if region {
        block.push_str("          AWS_DEFAULT_REGION: us-east-1\n");
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_end_with_newline() {
        for fragment in [
            ON_PUSH,
            ON_PUSH_DISPATCH,
            CHECKOUT,
            CHECKOUT_NAMED,
            AZURE_LOGIN,
            AZURE_LOGOUT,
            CONFIGURE_AWS_CREDENTIALS,
            ECR_LOGIN,
        ] {
            assert!(fragment.ends_with('\n'));
        }
        assert!(heroku_deploy("app").ends_with('\n'));
        assert!(beanstalk_deploy("a", "b", "c.zip").ends_with('\n'));
    }

    #[test]
    fn test_setup_cache_lines_are_gated() {
        assert!(setup_python("'3.10'", true).contains("cache: 'pip'"));
        assert!(!setup_python("'3.10'", false).contains("cache:"));
        assert!(setup_go("'1.21'", true).contains("cache: true"));
        assert!(setup_java("'17'", Some("gradle")).contains("cache: 'gradle'"));
        assert!(!setup_java("'17'", None).contains("cache:"));
    }

    #[test]
    fn test_secrets_stay_placeholder_references() {
        assert!(AZURE_LOGIN.contains("${{ secrets.AZURE_CLIENT_ID }}"));
        assert!(heroku_deploy("app").contains("${{ secrets.HEROKU_API_KEY }}"));
        assert!(aws_run_env(true).contains("${{ secrets.AWS_SECRET_ACCESS_KEY }}"));
    }
}
