//! Python deployment templates

use super::common;
use crate::workflow::OptionSet;

pub(super) fn azure_flask(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Flask to Azure Web App\n\n");
    doc.push_str(common::ON_PUSH_DISPATCH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'
  PYTHON_VERSION: '3.10'
  STARTUP_COMMAND: 'gunicorn --bind=0.0.0.0:8000 --timeout 600 --workers 4 app:app'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest
    permissions:
      contents: read
      id-token: write
    environment:
      name: 'Production'

    steps:
",
    );
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(&common::setup_python("${{ env.PYTHON_VERSION }}", options.cache));
    if options.cache {
        doc.push('\n');
        doc.push_str(
            "      - name: Cache dependencies
        uses: actions/cache@v3
        with:
          path: |
            ~/.cache/pip
            ~/.local/lib/python${{ env.PYTHON_VERSION }}/site-packages
          key: ${{ runner.os }}-pip-${{ hashFiles('**/requirements.txt') }}
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip setuptools wheel
",
    );
    if options.optimize {
        doc.push_str("          pip install --prefer-binary -r requirements.txt\n");
    } else {
        doc.push_str("          pip install -r requirements.txt\n");
    }
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: |
          pip install pytest
          pytest
",
        );
    }
    if options.optimize {
        doc.push('\n');
        doc.push_str(
            "      - name: Cleanup for production
        run: |
          find . -type d -name \"__pycache__\" -exec rm -rf {} + 2>/dev/null || true
          find . -type f -name \"*.pyc\" -delete
          find . -type f -name \"*.pyo\" -delete
",
        );
    }
    doc.push('\n');
    doc.push_str(common::AZURE_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Configure Azure App Service
        uses: azure/appservice-settings@v1
        with:
          app-name: ${{ env.AZURE_WEBAPP_NAME }}
          mask-inputs: false
          general-settings-json: '{\"linuxFxVersion\": \"PYTHON|${{ env.PYTHON_VERSION }}\"}'
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Azure Web App
        uses: azure/webapps-deploy@v3
        with:
          app-name: ${{ env.AZURE_WEBAPP_NAME }}
          package: '.'
          startup-command: ${{ env.STARTUP_COMMAND }}
",
    );
    doc.push('\n');
    doc.push_str(common::AZURE_LOGOUT);
    doc
}

pub(super) fn azure_django(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Django to Azure Web App\n\n");
    doc.push_str(common::ON_PUSH_DISPATCH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'
  PYTHON_VERSION: '3.10'
  STARTUP_COMMAND: 'gunicorn --bind=0.0.0.0:8000 project.wsgi:application'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest
    permissions:
      contents: read
      id-token: write

    steps:
",
    );
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_python("${{ env.PYTHON_VERSION }}", options.cache));
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: pip install -r requirements.txt
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: python manage.py test
",
        );
    }
    if options.optimize {
        doc.push('\n');
        doc.push_str(
            "      - name: Collect static files
        run: python manage.py collectstatic --noinput
",
        );
        doc.push('\n');
        doc.push_str(
            "      - name: Run migrations
        run: python manage.py migrate --noinput
",
        );
    }
    doc.push('\n');
    doc.push_str(common::AZURE_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Azure
        uses: azure/webapps-deploy@v3
        with:
          app-name: ${{ env.AZURE_WEBAPP_NAME }}
          package: '.'
          startup-command: ${{ env.STARTUP_COMMAND }}
",
    );
    doc
}

pub(super) fn azure_fastapi(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy FastAPI to Azure Web App\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'
  PYTHON_VERSION: '3.10'
  STARTUP_COMMAND: 'uvicorn main:app --host 0.0.0.0 --port 8000'

jobs:
  deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_python("${{ env.PYTHON_VERSION }}", options.cache));
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: pip install -r requirements.txt
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: |
          pip install pytest httpx
          pytest
",
        );
    }
    doc.push('\n');
    doc.push_str(common::AZURE_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Azure
        uses: azure/webapps-deploy@v3
        with:
          app-name: ${{ env.AZURE_WEBAPP_NAME }}
          package: '.'
          startup-command: ${{ env.STARTUP_COMMAND }}
",
    );
    doc
}

pub(super) fn aws_flask(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Flask to AWS Elastic Beanstalk\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_python("'3.10'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: pip install -r requirements.txt
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: pytest
",
        );
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Generate deployment package
        run: zip -r deploy.zip . -x '*.git*'
",
    );
    doc.push('\n');
    doc.push_str(&common::beanstalk_deploy("your-app", "your-app-env", "deploy.zip"));
    doc
}

pub(super) fn aws_django(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Django to AWS\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_python("'3.10'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: pip install -r requirements.txt
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Generate deployment package
        run: zip -r deploy.zip .
",
    );
    doc.push('\n');
    doc.push_str(&common::beanstalk_deploy(
        "your-django-app",
        "your-django-env",
        "deploy.zip",
    ));
    doc
}

pub(super) fn aws_fastapi(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy FastAPI to AWS\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_python("'3.10'", false));
    doc.push('\n');
    doc.push_str(
        "      - name: Install dependencies
        run: pip install -r requirements.txt
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Create deployment package
        run: zip -r deploy.zip .
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to AWS Lambda
        run: |
          aws lambda update-function-code \\
            --function-name your-fastapi-function \\
            --zip-file fileb://deploy.zip
",
    );
    doc.push_str(&common::aws_run_env(true));
    doc
}

pub(super) fn heroku_flask(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Flask to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    if options.tests {
        doc.push('\n');
        doc.push_str(&common::setup_python("'3.10'", false));
        doc.push('\n');
        doc.push_str(
            "      - name: Install dependencies
        run: pip install -r requirements.txt
",
        );
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: pytest
",
        );
    }
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-app-name"));
    doc
}

pub(super) fn heroku_django(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Django to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-django-app"));
    doc
}

pub(super) fn heroku_fastapi(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy FastAPI to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-fastapi-app"));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azure_flask_all_options() {
        let doc = azure_flask(&OptionSet::enabled());
        assert!(doc.contains("- name: Run tests"));
        assert!(doc.contains("~/.cache/pip"));
        assert!(doc.contains("cache: 'pip'"));
        assert!(doc.contains("- name: Cleanup for production"));
        assert!(doc.contains("--prefer-binary"));
    }

    #[test]
    fn test_azure_flask_options_disabled() {
        let doc = azure_flask(&OptionSet::disabled());
        assert!(!doc.contains("Run tests"));
        assert!(!doc.contains("actions/cache"));
        assert!(!doc.contains("Cleanup for production"));
        assert!(!doc.contains("--prefer-binary"));
        assert!(doc.contains("pip install -r requirements.txt"));
    }

    #[test]
    fn test_azure_django_optimize_adds_migrations() {
        let doc = azure_django(&OptionSet::disabled().with_optimize(true));
        assert!(doc.contains("collectstatic --noinput"));
        assert!(doc.contains("migrate --noinput"));
        assert!(!doc.contains("manage.py test"));
    }

    #[test]
    fn test_heroku_flask_gates_test_toolchain() {
        let with_tests = heroku_flask(&OptionSet::disabled().with_tests(true));
        assert!(with_tests.contains("actions/setup-python@v5"));
        assert!(with_tests.contains("run: pytest"));

        let without = heroku_flask(&OptionSet::disabled());
        assert!(!without.contains("actions/setup-python@v5"));
        assert!(without.contains("akhileshns/heroku-deploy"));
    }

    #[test]
    fn test_aws_fastapi_keeps_lambda_continuations() {
        let doc = aws_fastapi(&OptionSet::disabled());
        assert!(doc.contains("aws lambda update-function-code \\"));
        assert!(doc.contains("--zip-file fileb://deploy.zip"));
        assert!(doc.contains("AWS_DEFAULT_REGION: us-east-1"));
    }
}
