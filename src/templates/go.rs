//! Go deployment templates

use super::common;
use crate::workflow::OptionSet;

pub(super) fn azure_webapp(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Go to Azure Web App\n\n");
    doc.push_str(common::ON_PUSH_DISPATCH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'
  GO_VERSION: '1.21'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(&common::setup_go("${{ env.GO_VERSION }}", options.cache));
    doc.push('\n');
    doc.push_str(
        "      - name: Build application
        run: |
          go mod download
          go build -o app .
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: go test ./...
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

pub(super) fn azure_containerapp(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Go to Azure Container Apps\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  AZURE_CONTAINER_APP_NAME: 'your-app'
  AZURE_RESOURCE_GROUP: 'your-rg'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_go("'1.21'", options.cache));
    doc.push('\n');
    doc.push_str(
        "      - name: Build
        run: |
          go mod download
          go build -o app .
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Test
        run: go test ./...
",
        );
    }
    doc.push('\n');
    doc.push_str(common::AZURE_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Build and push container
        run: |
          az acr build --registry ${{ secrets.ACR_NAME }} \\
            --image ${{ env.AZURE_CONTAINER_APP_NAME }}:${{ github.sha }} .
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Container App
        run: |
          az containerapp update \\
            --name ${{ env.AZURE_CONTAINER_APP_NAME }} \\
            --resource-group ${{ env.AZURE_RESOURCE_GROUP }} \\
            --image ${{ secrets.ACR_NAME }}.azurecr.io/${{ env.AZURE_CONTAINER_APP_NAME }}:${{ github.sha }}
",
    );
    doc
}

pub(super) fn aws_lambda(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Go to AWS Lambda\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_go("'1.21'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Build
        run: |
          GOOS=linux GOARCH=amd64 go build -o bootstrap main.go
          zip deployment.zip bootstrap
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: go test ./...
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Lambda
        run: |
          aws lambda update-function-code \\
            --function-name your-function-name \\
            --zip-file fileb://deployment.zip
",
    );
    doc.push_str(&common::aws_run_env(true));
    doc
}

pub(super) fn aws_ec2(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Go to AWS EC2\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_go("'1.21'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Build
        run: |
          go mod download
          GOOS=linux GOARCH=amd64 go build -o app
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Test
        run: go test ./...
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to EC2
        run: |
          echo \"${{ secrets.EC2_SSH_KEY }}\" > private_key.pem
          chmod 600 private_key.pem
          scp -i private_key.pem -o StrictHostKeyChecking=no app ${{ secrets.EC2_USER }}@${{ secrets.EC2_HOST }}:/home/${{ secrets.EC2_USER }}/
          ssh -i private_key.pem -o StrictHostKeyChecking=no ${{ secrets.EC2_USER }}@${{ secrets.EC2_HOST }} 'sudo systemctl restart your-app'
",
    );
    doc
}

pub(super) fn heroku_webapp(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Go to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    if options.tests {
        doc.push('\n');
        doc.push_str(&common::setup_go("'1.21'", false));
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: go test ./...
",
        );
    }
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-go-app"));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azure_webapp_cache_uses_builtin_toggle() {
        let cached = azure_webapp(&OptionSet::disabled().with_cache(true));
        assert!(cached.contains("cache: true"));

        let uncached = azure_webapp(&OptionSet::disabled());
        assert!(!uncached.contains("cache: true"));
    }

    #[test]
    fn test_lambda_builds_bootstrap_binary() {
        let doc = aws_lambda(&OptionSet::disabled());
        assert!(doc.contains("GOOS=linux GOARCH=amd64 go build -o bootstrap main.go"));
        assert!(doc.contains("zip deployment.zip bootstrap"));
        assert!(doc.contains("fileb://deployment.zip"));
    }

    #[test]
    fn test_ec2_references_ssh_secrets_only() {
        let doc = aws_ec2(&OptionSet::enabled());
        assert!(doc.contains("${{ secrets.EC2_SSH_KEY }}"));
        assert!(doc.contains("${{ secrets.EC2_USER }}"));
        assert!(doc.contains("${{ secrets.EC2_HOST }}"));
    }

    #[test]
    fn test_heroku_gates_go_toolchain_behind_tests() {
        let without = heroku_webapp(&OptionSet::disabled());
        assert!(!without.contains("actions/setup-go@v5"));

        let with_tests = heroku_webapp(&OptionSet::disabled().with_tests(true));
        assert!(with_tests.contains("actions/setup-go@v5"));
        assert!(with_tests.contains("go test ./..."));
    }
}
