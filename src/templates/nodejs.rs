//! Node.js deployment templates

use super::common;
use crate::workflow::OptionSet;

pub(super) fn azure_express(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Express.js to Azure Web App\n\n");
    doc.push_str(common::ON_PUSH_DISPATCH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'
  NODE_VERSION: '18.x'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(&common::setup_node("${{ env.NODE_VERSION }}", options.cache));
    if options.cache {
        doc.push('\n');
        doc.push_str(
            "      - name: Cache node modules
        uses: actions/cache@v3
        with:
          path: ~/.npm
          key: ${{ runner.os }}-node-${{ hashFiles('**/package-lock.json') }}
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: npm ci
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: npm test
",
        );
    }
    if options.optimize {
        doc.push('\n');
        doc.push_str(
            "      - name: Build for production
        run: npm run build --if-present
",
        );
    }
    doc.push('\n');
    doc.push_str(common::AZURE_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Azure Web App
        uses: azure/webapps-deploy@v3
        with:
          app-name: ${{ env.AZURE_WEBAPP_NAME }}
          package: .
",
    );
    doc.push('\n');
    doc.push_str(common::AZURE_LOGOUT);
    doc
}

pub(super) fn azure_nextjs(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Next.js to Azure Static Web Apps\n\n");
    doc.push_str(common::ON_PUSH_DISPATCH);
    doc.push_str("jobs:\n  build-and-deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(&common::setup_node("'18.x'", options.cache));
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: npm ci
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Build application
        run: npm run build
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: npm test
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Azure Static Web Apps
        uses: Azure/static-web-apps-deploy@v1
        with:
          azure_static_web_apps_api_token: ${{ secrets.AZURE_STATIC_WEB_APPS_API_TOKEN }}
          repo_token: ${{ secrets.GITHUB_TOKEN }}
          action: \"upload\"
          app_location: \"/\"
          api_location: \"\"
          output_location: \"out\"
",
    );
    doc
}

pub(super) fn azure_react(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy React to Azure Static Web Apps\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  build-and-deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_node("'18.x'", options.cache));
    doc.push('\n');
    doc.push_str(
        "      - name: Install and Build
        run: |
          npm ci
          npm run build
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: npm test -- --passWithNoTests
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Azure
        uses: Azure/static-web-apps-deploy@v1
        with:
          azure_static_web_apps_api_token: ${{ secrets.AZURE_STATIC_WEB_APPS_API_TOKEN }}
          repo_token: ${{ secrets.GITHUB_TOKEN }}
          action: \"upload\"
          app_location: \"/\"
          output_location: \"build\"
",
    );
    doc
}

pub(super) fn aws_express(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Express to AWS Elastic Beanstalk\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_node("'18.x'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: npm ci
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: npm test
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Generate deployment package
        run: zip -r deploy.zip . -x '*.git*' 'node_modules/*'
",
    );
    doc.push('\n');
    doc.push_str(&common::beanstalk_deploy(
        "your-express-app",
        "your-express-env",
        "deploy.zip",
    ));
    doc
}

pub(super) fn aws_nextjs(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Next.js to AWS\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_node("'18.x'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Install and build
        run: |
          npm ci
          npm run build
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: npm test
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to S3
        run: aws s3 sync ./out s3://${{ secrets.AWS_S3_BUCKET }} --delete
",
    );
    doc.push_str(&common::aws_run_env(true));
    doc
}

pub(super) fn aws_react(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy React to AWS S3\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_node("'18.x'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Install and build
        run: |
          npm ci
          npm run build
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to S3
        run: aws s3 sync ./build s3://${{ secrets.AWS_S3_BUCKET }} --delete
",
    );
    doc.push_str(&common::aws_run_env(false));
    doc
}

pub(super) fn heroku_express(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Express to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    if options.tests {
        doc.push('\n');
        doc.push_str(&common::setup_node("'18.x'", false));
        doc.push('\n');
        doc.push_str(
            "      - name: Install dependencies
        run: npm ci
",
        );
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: npm test
",
        );
    }
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-express-app"));
    doc
}

pub(super) fn heroku_nextjs(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Next.js to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-nextjs-app"));
    doc
}

pub(super) fn heroku_react(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy React to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-react-app"));
    doc.push_str("          buildpack: https://github.com/mars/create-react-app-buildpack.git\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azure_express_cache_gates_two_sections() {
        let cached = azure_express(&OptionSet::disabled().with_cache(true));
        assert!(cached.contains("cache: 'npm'"));
        assert!(cached.contains("- name: Cache node modules"));

        let uncached = azure_express(&OptionSet::disabled());
        assert!(!uncached.contains("cache: 'npm'"));
        assert!(!uncached.contains("Cache node modules"));
    }

    #[test]
    fn test_azure_nextjs_always_builds() {
        let doc = azure_nextjs(&OptionSet::disabled());
        assert!(doc.contains("run: npm run build"));
        assert!(doc.contains("output_location: \"out\""));
    }

    #[test]
    fn test_heroku_react_keeps_buildpack() {
        let doc = heroku_react(&OptionSet::enabled());
        assert!(doc.contains("buildpack: https://github.com/mars/create-react-app-buildpack.git"));
    }

    #[test]
    fn test_aws_react_has_no_conditional_sections() {
        assert_eq!(
            aws_react(&OptionSet::enabled()),
            aws_react(&OptionSet::disabled())
        );
    }
}
