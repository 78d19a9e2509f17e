//! Java deployment templates

use super::common;
use crate::workflow::OptionSet;

pub(super) fn azure_springboot(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Spring Boot to Azure\n\n");
    doc.push_str(common::ON_PUSH_DISPATCH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'
  JAVA_VERSION: '17'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(&common::setup_java(
        "${{ env.JAVA_VERSION }}",
        options.cache.then_some("maven"),
    ));
    doc.push('\n');
    doc.push_str("      - name: Build with Maven\n");
    let skip_tests = if options.tests { "false" } else { "true" };
    doc.push_str(&format!("        run: mvn clean package -DskipTests={skip_tests}\n"));
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: mvn test
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
          package: '${{ github.workspace }}/target/*.jar'
",
    );
    doc.push('\n');
    doc.push_str(common::AZURE_LOGOUT);
    doc
}

pub(super) fn azure_maven(options: &OptionSet) -> String {
    let mut doc = String::from("name: Build and Deploy Java Maven to Azure\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_java("'17'", options.cache.then_some("maven")));
    doc.push('\n');
    doc.push_str(
        "      - name: Build with Maven
        run: mvn clean install
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: mvn test
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
          package: target/*.jar
",
    );
    doc
}

pub(super) fn azure_gradle(options: &OptionSet) -> String {
    let mut doc = String::from("name: Build and Deploy Java Gradle to Azure\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  AZURE_WEBAPP_NAME: 'your-app-name'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_java("'17'", options.cache.then_some("gradle")));
    doc.push('\n');
    doc.push_str(
        "      - name: Build with Gradle
        run: ./gradlew build
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: ./gradlew test
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
          package: build/libs/*.jar
",
    );
    doc
}

pub(super) fn aws_springboot(options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Spring Boot to AWS\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_java("'17'", None));
    doc.push('\n');
    doc.push_str(
        "      - name: Build with Maven
        run: mvn clean package
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(
            "      - name: Run tests
        run: mvn test
",
        );
    }
    doc.push('\n');
    doc.push_str(&common::beanstalk_deploy(
        "your-springboot-app",
        "your-springboot-env",
        "target/*.jar",
    ));
    doc
}

pub(super) fn aws_maven(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Java Maven to AWS\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_java("'17'", None));
    doc.push('\n');
    doc.push_str(
        "      - name: Build with Maven
        run: mvn clean package
",
    );
    doc.push('\n');
    doc.push_str(&common::beanstalk_deploy(
        "your-java-app",
        "your-java-env",
        "target/*.jar",
    ));
    doc
}

pub(super) fn aws_gradle(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Java Gradle to AWS\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::setup_java("'17'", None));
    doc.push('\n');
    doc.push_str(
        "      - name: Build with Gradle
        run: ./gradlew build
",
    );
    doc.push('\n');
    doc.push_str(&common::beanstalk_deploy(
        "your-gradle-app",
        "your-gradle-env",
        "build/libs/*.jar",
    ));
    doc
}

pub(super) fn heroku_springboot(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Spring Boot to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-springboot-app"));
    doc
}

pub(super) fn heroku_maven(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Java Maven to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-java-app"));
    doc
}

pub(super) fn heroku_gradle(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy Java Gradle to Heroku\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str("jobs:\n  deploy:\n    runs-on: ubuntu-latest\n\n    steps:\n");
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(&common::heroku_deploy("your-gradle-app"));
    doc
}
